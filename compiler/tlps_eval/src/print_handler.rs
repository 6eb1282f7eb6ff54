//! Destination for `print` statement output.
//!
//! - `Stdout`: the default, one line per `print`
//! - `Buffer`: captures output for tests and embedding hosts
//! - `Silent`: discards everything
//!
//! Enum dispatch rather than a trait object: the set of destinations is
//! closed and `print` is on the hot path of most programs.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed lines go.
pub enum PrintHandlerImpl {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one line; a newline is appended.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output so far. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.get_output().lines().map(str::to_string).collect()
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler that captures output for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
