// Spec result structures supplied by the host engine at spec completion

use serde::Serialize;

/// One evaluated expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectation {
    pub message: String,
}

impl Expectation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A completed spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecResult {
    pub description: String,
    pub passed_expectations: Vec<Expectation>,
    pub failed_expectations: Vec<Expectation>,
}

impl SpecResult {
    /// Create a result whose expectations all passed
    pub fn passed<M: Into<String>>(
        description: impl Into<String>,
        passed_messages: impl IntoIterator<Item = M>,
    ) -> Self {
        Self {
            description: description.into(),
            passed_expectations: passed_messages
                .into_iter()
                .map(Expectation::new)
                .collect(),
            failed_expectations: Vec::new(),
        }
    }

    /// Create a result with at least one failed expectation
    pub fn failed<M: Into<String>>(
        description: impl Into<String>,
        failed_messages: impl IntoIterator<Item = M>,
    ) -> Self {
        Self {
            description: description.into(),
            passed_expectations: Vec::new(),
            failed_expectations: failed_messages
                .into_iter()
                .map(Expectation::new)
                .collect(),
        }
    }

    /// Create a result that executed no expectations of either kind
    pub fn empty(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed_expectations: Vec::new(),
            failed_expectations: Vec::new(),
        }
    }
}
