// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;
use thiserror::Error;

use super::{MergeError, StepError};

/// Errors that terminate a pipeline run.
///
/// Every variant that originates from a step carries the step name so the
/// caller can report which node failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The step body returned an error
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: StepError,
    },

    /// The step did not finish within the configured timeout
    #[error("Step '{step}' timed out after {timeout:?}")]
    StepTimedOut { step: String, timeout: Duration },

    /// The step returned an update that could not be merged
    #[error("Step '{step}' returned an invalid update: {source}")]
    InvalidUpdate {
        step: String,
        #[source]
        source: MergeError,
    },

    /// The run executed more steps than allowed
    #[error("Run exceeded the limit of {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// The graph routed to a name with no registered step
    #[error("Step '{0}' not found in registry")]
    StepNotFound(String),

    /// The run already failed; its error was reported to the earlier caller
    #[error("Run already failed after {steps_executed} steps")]
    RunAlreadyFailed { steps_executed: usize },
}

impl ExecutionError {
    /// Name of the step the failure is attributed to, if any
    pub fn step(&self) -> Option<&str> {
        match self {
            ExecutionError::StepFailed { step, .. }
            | ExecutionError::StepTimedOut { step, .. }
            | ExecutionError::InvalidUpdate { step, .. } => Some(step),
            ExecutionError::StepNotFound(step) => Some(step),
            ExecutionError::StepLimitExceeded { .. }
            | ExecutionError::RunAlreadyFailed { .. } => None,
        }
    }
}
