// Output sinks - where report lines go

use std::io::Write;

use console::Term;

/// Destination for report output
///
/// `write_provisional` emits text without a line terminator so a later
/// `clear_provisional` can erase it in place; sinks without cursor control
/// treat the erase as best-effort. Writes are fire-and-forget and I/O errors
/// are swallowed.
pub trait OutputSink {
    /// Write one terminated line
    fn write_line(&mut self, line: &str);

    /// Write text without a terminator, flushed immediately
    fn write_provisional(&mut self, text: &str);

    /// Erase the pending provisional text and return the cursor to column 0
    fn clear_provisional(&mut self);
}

/// Sink backed by the process stdout terminal
pub struct TerminalSink {
    term: Term,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl OutputSink for TerminalSink {
    fn write_line(&mut self, line: &str) {
        let _ = self.term.write_line(line);
    }

    fn write_provisional(&mut self, text: &str) {
        let _ = write!(self.term, "{text}");
        let _ = self.term.flush();
    }

    fn clear_provisional(&mut self) {
        // No-op when stdout is not attended
        let _ = self.term.clear_line();
    }
}

/// In-memory sink for tests and non-interactive hosts
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
    provisional: Option<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get completed lines written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get provisional text not yet cleared or terminated
    pub fn provisional(&self) -> Option<&str> {
        self.provisional.as_deref()
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        // An uncleared provisional shares the physical line with what follows
        match self.provisional.take() {
            Some(mut pending) => {
                pending.push_str(line);
                self.lines.push(pending);
            }
            None => self.lines.push(line.to_string()),
        }
    }

    fn write_provisional(&mut self, text: &str) {
        match self.provisional.as_mut() {
            Some(pending) => pending.push_str(text),
            None => self.provisional = Some(text.to_string()),
        }
    }

    fn clear_provisional(&mut self) {
        self.provisional = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_clear_discards_provisional() {
        let mut sink = BufferSink::new();

        sink.write_provisional("* pending");
        sink.clear_provisional();
        sink.write_line("done");

        assert_eq!(sink.lines(), ["done"]);
        assert!(sink.provisional().is_none());
    }

    #[test]
    fn test_buffer_sink_uncleared_provisional_joins_next_line() {
        let mut sink = BufferSink::new();

        sink.write_provisional("* pending");
        sink.write_line(" tail");

        assert_eq!(sink.lines(), ["* pending tail"]);
    }
}
