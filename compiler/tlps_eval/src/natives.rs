//! Built-in host functions available to every program by default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{native_error, EvalError};
use crate::{NativeFunction, Value};

/// The natives installed unless the builder opts out.
pub fn default_natives() -> Vec<NativeFunction> {
    vec![NativeFunction::new("clock", 0, clock)]
}

/// `clock()`: seconds since the Unix epoch, with sub-second precision.
pub fn clock(_args: &[Value]) -> Result<Value, EvalError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| Value::Number(elapsed.as_secs_f64()))
        .map_err(|err| native_error(format!("clock: system time before Unix epoch: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_returns_epoch_seconds() {
        let now = clock(&[]).unwrap().as_number().unwrap();
        // 2020-01-01T00:00:00Z
        assert!(now > 1_577_836_800.0);
        assert!(now.is_finite());
    }

    #[test]
    fn test_default_natives() {
        let natives = default_natives();
        assert_eq!(natives.len(), 1);
        assert_eq!(natives[0].name(), "clock");
        assert_eq!(natives[0].arity(), 0);
    }
}
