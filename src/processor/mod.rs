//! Rule Processors
//!
//! Every audit rule follows the same two-phase shape: validate the inputs
//! into a typed subject, then evaluate the subject into an output. The
//! provided `process` wrapper turns any validation error into a rejection
//! payload carrying a human-readable comment, so no partial result ever
//! reaches the caller.

mod rewards;

pub use rewards::*;

use crate::error::RewardResult;
use serde::{Deserialize, Serialize};

/// Two-phase audit rule: fallible validation, pure evaluation
pub trait RuleProcessor {
    type Input;
    type Subject;
    type Output;

    /// Check preconditions and shape the input into an evaluable subject
    fn validate(&self, input: Self::Input) -> RewardResult<Self::Subject>;

    /// Compute the output; infallible once validation passed
    fn evaluate(&self, subject: Self::Subject) -> Self::Output;

    /// Run both phases, mapping errors into a rejection payload
    fn process(&self, input: Self::Input) -> ProcessorResponse<Self::Output> {
        match self.validate(input) {
            Ok(subject) => ProcessorResponse::Approved(self.evaluate(subject)),
            Err(err) => {
                tracing::warn!(error = %err, "rule processor rejected request");
                ProcessorResponse::Rejected {
                    result_comment: err.to_string(),
                }
            }
        }
    }
}

/// Outcome of one rule processor run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessorResponse<T> {
    Approved(T),
    #[serde(rename_all = "camelCase")]
    Rejected { result_comment: String },
}

impl<T> ProcessorResponse<T> {
    pub fn is_approved(&self) -> bool {
        matches!(self, ProcessorResponse::Approved(_))
    }

    /// The output payload, if approved
    pub fn output(&self) -> Option<&T> {
        match self {
            ProcessorResponse::Approved(output) => Some(output),
            ProcessorResponse::Rejected { .. } => None,
        }
    }

    /// The rejection comment, if rejected
    pub fn result_comment(&self) -> Option<&str> {
        match self {
            ProcessorResponse::Approved(_) => None,
            ProcessorResponse::Rejected { result_comment } => Some(result_comment),
        }
    }
}
