//! Module of helper functions for debugging and integration tests.
//!
//! Tests should only exercise the public API surface in general, with some
//! exceptions as provided by this module.
use std::cell::Cell;

thread_local! {
    /// Buffer of all debugging output logged internally by html5scan.
    pub static OUTPUT: Cell<String> = Cell::default();
}

/// Simple debug logger for tests.
///
/// Collects state-transition traces into a thread-local buffer that a failing
/// test can dump, without spamming stdout on the happy path.
pub fn trace_log(msg: &str) {
    OUTPUT.with(|cell| {
        let mut buf = cell.take();
        buf.push_str(msg);
        buf.push('\n');

        if buf.len() > 20 * 1024 * 1024 {
            buf.clear();
            buf.push_str("[truncated output]\n");
        }

        cell.set(buf);
    });
}
