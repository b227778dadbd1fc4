/*
  chesscore, a move-generation and search library for a chess engine.
  Licensed under the MIT license. See LICENSE for details.
*/

//! Abstract logging sink.
//!
//! The core never opens a file or writes to a stream directly; it reports through whatever
//! sink its caller wires in. This keeps the move generator, board, and search free of I/O so
//! they stay trivially testable.

/// A destination for informational and error messages raised by the core.
pub trait LogSink {
    /// Record an informational message.
    fn info(&self, message: &str);
    /// Record an error message.
    fn error(&self, message: &str);
}

/// A sink that discards everything. Used as the default when a caller doesn't care to observe
/// the core's diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        errors: RefCell<Vec<String>>,
    }

    impl LogSink for RecordingSink {
        fn info(&self, _message: &str) {}
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn null_sink_accepts_any_message_without_panicking() {
        let sink = NullSink;
        sink.info("hello");
        sink.error("world");
    }

    #[test]
    fn recording_sink_captures_errors() {
        let sink = RecordingSink::default();
        sink.error("source square is not occupied");
        assert_eq!(sink.errors.borrow().len(), 1);
    }
}
