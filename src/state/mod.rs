// State module - Run state management
// Centralized tallies for completed specs and the summary arithmetic

pub mod result;

pub use result::{Expectation, SpecResult};

use serde::Serialize;

/// Outcome classification of one completed spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecOutcome {
    Passed,
    /// Passed, but no expectation of either kind was executed
    PassedWithoutExpectations,
    Failed,
}

/// Pass/fail/warn tallies for a run
///
/// `pass + fail` equals the number of completed specs; `warn` counts the
/// subset of passed specs that executed no expectations, so `warn <= pass`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pass: usize,
    fail: usize,
    warn: usize,
}

impl RunCounts {
    /// Create zeroed counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a completed spec and bump the matching tallies
    ///
    /// A spec fails iff it has at least one failed expectation; warn is the
    /// sub-case of pass with zero expectations executed, never of fail.
    pub fn record(&mut self, result: &SpecResult) -> SpecOutcome {
        if !result.failed_expectations.is_empty() {
            self.fail += 1;
            return SpecOutcome::Failed;
        }

        self.pass += 1;
        if result.passed_expectations.is_empty() {
            self.warn += 1;
            SpecOutcome::PassedWithoutExpectations
        } else {
            SpecOutcome::Passed
        }
    }

    /// Get passed specs
    pub fn pass(&self) -> usize {
        self.pass
    }

    /// Get failed specs
    pub fn fail(&self) -> usize {
        self.fail
    }

    /// Get passed specs that executed no expectations
    pub fn warn(&self) -> usize {
        self.warn
    }

    /// Get completed specs
    pub fn total(&self) -> usize {
        self.pass + self.fail
    }

    /// Check if every completed spec passed
    pub fn all_passed(&self) -> bool {
        self.fail == 0
    }

    /// Get the pass and fail percentages
    ///
    /// The fail rate is derived as `100 - pass_rate`, so the two sum to
    /// exactly 100 regardless of how the division rounds. A run with zero
    /// completed specs reports both rates as 0.
    pub fn rates(&self) -> (f64, f64) {
        let total = self.total();
        if total == 0 {
            return (0.0, 0.0);
        }
        let pass_rate = (self.pass * 100) as f64 / total as f64;
        (pass_rate, 100.0 - pass_rate)
    }

    /// Reset all tallies
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_passed() {
        let mut counts = RunCounts::new();

        let outcome = counts.record(&SpecResult::passed("adds", vec!["1 equals 1"]));

        assert_eq!(outcome, SpecOutcome::Passed);
        assert_eq!(counts.pass(), 1);
        assert_eq!(counts.fail(), 0);
        assert_eq!(counts.warn(), 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_record_failed() {
        let mut counts = RunCounts::new();

        let outcome = counts.record(&SpecResult::failed("broken", vec!["expected 1 to be 2"]));

        assert_eq!(outcome, SpecOutcome::Failed);
        assert_eq!(counts.fail(), 1);
        assert_eq!(counts.pass(), 0);
        assert!(!counts.all_passed());
    }

    #[test]
    fn test_record_no_expectations_counts_as_pass_and_warn() {
        let mut counts = RunCounts::new();

        let outcome = counts.record(&SpecResult::empty("todo"));

        assert_eq!(outcome, SpecOutcome::PassedWithoutExpectations);
        assert_eq!(counts.pass(), 1);
        assert_eq!(counts.warn(), 1);
        assert_eq!(counts.fail(), 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_failed_spec_without_passed_expectations_is_never_warn() {
        let mut counts = RunCounts::new();
        // Zero passed expectations only warns on the pass path
        let result = SpecResult::failed("mixed", vec!["expected true to be false"]);

        let outcome = counts.record(&result);

        assert_eq!(outcome, SpecOutcome::Failed);
        assert_eq!(counts.warn(), 0);
    }

    #[test]
    fn test_rates_sum_to_exactly_100() {
        let mut counts = RunCounts::new();
        counts.record(&SpecResult::passed("a", vec!["ok"]));
        counts.record(&SpecResult::passed("b", vec!["ok"]));
        counts.record(&SpecResult::failed("c", vec!["nope"]));

        let (pass_rate, fail_rate) = counts.rates();

        assert_eq!(pass_rate + fail_rate, 100.0);
    }

    #[test]
    fn test_rates_with_zero_specs() {
        let counts = RunCounts::new();

        let (pass_rate, fail_rate) = counts.rates();

        assert_eq!(pass_rate, 0.0);
        assert_eq!(fail_rate, 0.0);
        assert!(!pass_rate.is_nan());
    }

    #[test]
    fn test_reset() {
        let mut counts = RunCounts::new();
        counts.record(&SpecResult::failed("c", vec!["nope"]));
        counts.record(&SpecResult::empty("todo"));

        counts.reset();

        assert_eq!(counts, RunCounts::new());
    }

    #[test]
    fn test_warn_never_exceeds_pass() {
        let mut counts = RunCounts::new();
        counts.record(&SpecResult::empty("a"));
        counts.record(&SpecResult::empty("b"));
        counts.record(&SpecResult::passed("c", vec!["ok"]));
        counts.record(&SpecResult::failed("d", vec!["nope"]));

        assert!(counts.warn() <= counts.pass());
        assert_eq!(counts.total(), counts.pass() + counts.fail());
    }
}
