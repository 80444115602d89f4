//! Line-written notifications

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Callback receiving the exact text of every line the logger attempted to
/// write, whether or not the write succeeded.
pub type LineListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Invoke every listener in subscription order.
///
/// Each listener is isolated with `catch_unwind`, so one panicking listener
/// does not keep the others from seeing the line.
pub(crate) fn notify_all(listeners: &[LineListener], line: &str) {
    for (idx, listener) in listeners.iter().enumerate() {
        let result = catch_unwind(AssertUnwindSafe(|| listener(line)));

        if let Err(panic_info) = result {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Line listener #{} panicked: {}. \
                 Other listeners continue to function.",
                idx, panic_msg
            );
        }
    }
}
