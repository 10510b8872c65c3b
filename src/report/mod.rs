// Report module - lifecycle callbacks and console rendering

pub mod console;

pub use console::ConsoleReporter;

use crate::state::SpecResult;

/// Reporter trait
///
/// One method per lifecycle event, invoked by the host test-execution engine
/// on a single thread in strict depth-first order: a suite's start precedes
/// all of its children's events, which precede its own end, and every start
/// has exactly one matching end. Methods return nothing; the host never
/// consumes a result.
pub trait Reporter {
    /// Called once, before any suite or spec
    fn on_run_start(&mut self);

    /// Called when a suite starts
    fn on_suite_start(&mut self, description: &str);

    /// Called when a spec starts
    fn on_spec_start(&mut self, description: &str);

    /// Called when a spec finishes
    fn on_spec_end(&mut self, result: &SpecResult);

    /// Called when a suite finishes; suites close LIFO
    fn on_suite_end(&mut self, description: &str);

    /// Called once, after every suite has finished
    fn on_run_end(&mut self);
}
