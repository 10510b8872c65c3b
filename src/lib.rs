pub mod report;
pub mod sink;
pub mod state;
pub mod style;

pub use report::{ConsoleReporter, Reporter};
pub use sink::{BufferSink, OutputSink, TerminalSink};
pub use state::{Expectation, RunCounts, SpecOutcome, SpecResult};
pub use style::Palette;
