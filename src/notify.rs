use std::cell::RefCell;

use tracing::trace;

/// Receives human-readable notices.
///
/// Every status line produced by the vehicles, the catalogue and the command
/// session is handed to a `Notifier`; none of them write to the terminal
/// directly.
pub trait Notifier {
    /// Emit a single informational notice.
    fn info(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

/// Writes each notice to standard output on its own line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Notifier for Console {
    fn info(&self, message: &str) {
        trace!(message, "notice");
        println!("{message}");
    }
}

/// Records notices in memory instead of printing them.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every notice recorded so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the recorded notices and clears the transcript.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }

    /// The number of notices recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Notifier for Transcript {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{Notifier, Transcript};

    #[test]
    fn transcript_keeps_order() {
        let transcript = Transcript::new();
        transcript.info("first");
        transcript.info("second");

        assert_eq!(transcript.lines(), ["first", "second"]);
    }

    #[test]
    fn take_drains_the_transcript() {
        let transcript = Transcript::new();
        transcript.info("only");

        assert_eq!(transcript.take(), ["only"]);
        assert!(transcript.is_empty());
        assert!(transcript.lines().is_empty());

        transcript.info("after");
        assert_eq!(transcript.take(), ["after"]);
    }

    #[test]
    fn references_forward_to_the_notifier() {
        fn emit(notifier: impl Notifier) {
            notifier.info("via reference");
        }

        let transcript = Transcript::new();
        emit(&transcript);

        assert_eq!(transcript.len(), 1);
    }
}
