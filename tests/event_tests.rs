//! Log callback recovery. Kept in its own binary: the callback is global.

use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use opentui_grapheme::{LogLevel, emit_log, set_log_callback};

#[test]
fn test_emit_log_survives_panicking_callback() {
    set_log_callback(|_, _| panic!("callback failure"));
    let result = panic::catch_unwind(|| emit_log(LogLevel::Warn, "first"));
    assert!(result.is_err());

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    set_log_callback(move |level, message| {
        if level == LogLevel::Info && message == "second" {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }
    });
    emit_log(LogLevel::Info, "second");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
