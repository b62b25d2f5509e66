// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised when a structured payload cannot become a `State`
#[derive(Debug, Error)]
pub enum StateInitError {
    /// The payload is not valid JSON or a field has the wrong type
    #[error("Malformed state payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The payload parsed but is not a JSON object
    #[error("State payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Errors raised when a step update cannot be merged into the state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// `revision_number` may never decrease during a run
    #[error("revision_number cannot decrease from {current} to {proposed}")]
    RevisionRegression { current: u32, proposed: u32 },
}
