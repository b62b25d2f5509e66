// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised from inside a step body.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StepError {
    /// The step could not produce an update from the current state
    #[error("{0}")]
    Message(String),

    /// A call to an external collaborator failed
    #[error("{service} call failed: {source}")]
    External {
        service: String,
        #[source]
        source: BoxError,
    },
}

impl StepError {
    pub fn message(msg: impl Into<String>) -> Self {
        StepError::Message(msg.into())
    }

    pub fn external(service: impl Into<String>, source: impl Into<BoxError>) -> Self {
        StepError::External {
            service: service.into(),
            source: source.into(),
        }
    }
}
