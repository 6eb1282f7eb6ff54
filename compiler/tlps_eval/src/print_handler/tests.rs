use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_println_appends_newline() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.println("");
    handler.println("world");
    assert_eq!(handler.get_output(), "hello\n\nworld\n");
    assert_eq!(handler.lines(), vec!["hello", "", "world"]);
}

#[test]
fn buffer_clear_empties() {
    let handler = buffer_handler();
    handler.println("x");
    handler.clear();
    assert_eq!(handler.get_output(), "");
    assert!(handler.lines().is_empty());
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.println("ignored");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn stdout_captures_nothing() {
    let handler = stdout_handler();
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handle_sees_same_buffer() {
    let handler = buffer_handler();
    let host_view = Arc::clone(&handler);
    handler.println("from interpreter");
    assert_eq!(host_view.get_output(), "from interpreter\n");
}
