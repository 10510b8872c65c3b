// Console reporter - indented, colored progress output with a final summary

use std::time::Instant;

use tracing::debug;

use super::Reporter;
use crate::sink::{BufferSink, OutputSink, TerminalSink};
use crate::state::{RunCounts, SpecOutcome, SpecResult};
use crate::style::Palette;

const INDENT_UNIT: &str = "  ";

/// Console reporter
///
/// Owns the run state: the current indentation, the stack of open suites,
/// the pass/fail/warn tallies, and the run's start instant. All of it is
/// reset by [`Reporter::on_run_start`], so one reporter can serve
/// consecutive runs.
pub struct ConsoleReporter<S = TerminalSink> {
    sink: S,
    palette: Palette,
    indent: String,
    suite_stack: Vec<String>,
    counts: RunCounts,
    started_at: Option<Instant>,
}

impl ConsoleReporter<TerminalSink> {
    /// Create a reporter writing to the process terminal
    pub fn stdout() -> Self {
        Self::with_sink(TerminalSink::stdout())
    }
}

impl ConsoleReporter<BufferSink> {
    /// Create a reporter writing to an in-memory buffer
    pub fn buffered() -> Self {
        Self::with_sink(BufferSink::new())
    }
}

impl<S: OutputSink> ConsoleReporter<S> {
    /// Create a reporter over an arbitrary sink with the default palette
    pub fn with_sink(sink: S) -> Self {
        Self::with_palette(sink, Palette::default())
    }

    /// Create a reporter with a custom palette
    pub fn with_palette(sink: S, palette: Palette) -> Self {
        Self {
            sink,
            palette,
            indent: String::new(),
            suite_stack: Vec::new(),
            counts: RunCounts::new(),
            started_at: None,
        }
    }

    /// Get the tallies accumulated so far
    pub fn counts(&self) -> &RunCounts {
        &self.counts
    }

    /// Get the descriptions of the currently open suites, outermost first
    pub fn suite_path(&self) -> &[String] {
        &self.suite_stack
    }

    /// Get the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the reporter and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: OutputSink> Reporter for ConsoleReporter<S> {
    fn on_run_start(&mut self) {
        self.indent.clear();
        self.suite_stack.clear();
        self.counts.reset();
        self.started_at = Some(Instant::now());
        debug!("test run started");
        self.sink.write_line("Starting tests");
    }

    fn on_suite_start(&mut self, description: &str) {
        // The header renders at the parent's level; children go one deeper
        let header = self
            .palette
            .suite
            .apply_to(format!("{}{}", self.indent, description))
            .to_string();
        self.sink.write_line(&header);
        self.indent.push_str(INDENT_UNIT);
        self.suite_stack.push(description.to_string());
    }

    fn on_spec_start(&mut self, description: &str) {
        self.sink
            .write_provisional(&format!("{}* {}", self.indent, description));
    }

    fn on_spec_end(&mut self, result: &SpecResult) {
        self.sink.clear_provisional();
        match self.counts.record(result) {
            SpecOutcome::Passed => {
                let line = self
                    .palette
                    .pass
                    .apply_to(format!("{}✓ {}", self.indent, result.description))
                    .to_string();
                self.sink.write_line(&line);
            }
            SpecOutcome::PassedWithoutExpectations => {
                let line = self
                    .palette
                    .warn
                    .apply_to(format!(
                        "{}? {} (No expectations)",
                        self.indent, result.description
                    ))
                    .to_string();
                self.sink.write_line(&line);
            }
            SpecOutcome::Failed => {
                let line = self
                    .palette
                    .fail
                    .apply_to(format!("{}✘ {}", self.indent, result.description))
                    .to_string();
                self.sink.write_line(&line);
                for expectation in &result.failed_expectations {
                    let line = self
                        .palette
                        .fail
                        .apply_to(format!("{}  - {}", self.indent, expectation.message))
                        .to_string();
                    self.sink.write_line(&line);
                }
            }
        }
    }

    fn on_suite_end(&mut self, description: &str) {
        // Unbalanced pairs are a host contract violation; saturate, don't panic
        self.indent
            .truncate(self.indent.len().saturating_sub(INDENT_UNIT.len()));
        self.suite_stack.pop();
        debug!(
            suite = description,
            depth = self.suite_stack.len(),
            "suite finished"
        );
    }

    fn on_run_end(&mut self) {
        let elapsed_ms = self
            .started_at
            .map(|started| started.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        let total = self.counts.total();
        let (pass_rate, fail_rate) = self.counts.rates();
        debug!(
            pass = self.counts.pass(),
            fail = self.counts.fail(),
            warn = self.counts.warn(),
            "test run finished"
        );

        self.sink.write_line("");
        let passed_line = self
            .palette
            .pass
            .apply_to(format!(
                "{}/{} ({}%) passed",
                self.counts.pass(),
                total,
                pass_rate
            ))
            .to_string();
        self.sink.write_line(&passed_line);
        let failed_line = self
            .palette
            .fail
            .apply_to(format!(
                "{}/{} ({}%) failed",
                self.counts.fail(),
                total,
                fail_rate
            ))
            .to_string();
        self.sink.write_line(&failed_line);
        if self.counts.warn() > 0 {
            let warn_line = self
                .palette
                .warn
                .apply_to(format!(
                    "{} test(s) without any expectations",
                    self.counts.warn()
                ))
                .to_string();
            self.sink.write_line(&warn_line);
        }
        self.sink
            .write_line(&format!("Finished in {elapsed_ms:.4}ms"));
    }
}
