//! Run Errors

use crate::run::RunState;

/// Errors surfaced by a [`Runner`](crate::Runner).
///
/// Lifecycle misuse (`Reuse`, `NotReady`) is reported synchronously to the
/// caller. Algorithm faults (`Unorderable`, `Panicked`) are caught at the run
/// boundary and move the run into [`RunState::Failed`]; the same error is then
/// retrievable through [`Runner::failure`](crate::Runner::failure).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// `run()` was called on a runner that already reached a terminal state
    #[error("run() called on a runner that is already {state}")]
    Reuse {
        /// State the runner was in when re-run was attempted
        state: RunState,
    },
    /// A result or finalized metrics were requested before completion
    #[error("run has not completed (state: {state})")]
    NotReady {
        /// State the runner was in when the request was made
        state: RunState,
    },
    /// Two elements could not be ordered
    #[error("cannot order arr[{left}]={left_value} against arr[{right}]={right_value}")]
    Unorderable {
        /// Position of the left operand
        left: usize,
        /// Position of the right operand
        right: usize,
        /// Debug rendering of the left operand
        left_value: String,
        /// Debug rendering of the right operand
        right_value: String,
    },
    /// The algorithm body panicked (usually inside a user `PartialOrd`)
    #[error("algorithm panicked: {0}")]
    Panicked(String),
}

impl RunError {
    /// Short machine-readable kind, used in exported documents
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Reuse { .. } => "reuse",
            RunError::NotReady { .. } => "not_ready",
            RunError::Unorderable { .. } => "unorderable_input",
            RunError::Panicked(_) => "panic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let err = RunError::Unorderable {
            left: 0,
            right: 3,
            left_value: "1.0".to_string(),
            right_value: "NaN".to_string(),
        };
        assert_eq!(err.to_string(), "cannot order arr[0]=1.0 against arr[3]=NaN");
        assert_eq!(err.kind(), "unorderable_input");

        let err = RunError::Reuse {
            state: RunState::Completed,
        };
        assert_eq!(err.to_string(), "run() called on a runner that is already completed");
    }
}
