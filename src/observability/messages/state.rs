// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for initial state construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Structured input could not be parsed; the raw text is used as `student_data`.
///
/// # Log Level
/// `warn!` - Recovered locally
///
/// # Example
/// ```
/// use learning_pathway::observability::messages::state::PayloadFallback;
///
/// let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "expected value");
/// let msg = PayloadFallback {
///     input_len: 12,
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("falling back to raw text"));
/// ```
pub struct PayloadFallback<'a> {
    pub input_len: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PayloadFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Structured input rejected ({}), falling back to raw text ({} bytes)",
            self.error, self.input_len
        )
    }
}

impl StructuredLog for PayloadFallback<'_> {
    fn log(&self) {
        tracing::warn!(
            input_len = self.input_len,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "payload_fallback",
            span_name = name,
            input_len = self.input_len,
            error = %self.error,
        )
    }
}
