// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `engine` - pipeline run lifecycle (start, completion, failure)
//! * `step` - step execution and registration
//! * `validation` - graph validation errors and warnings
//! * `state` - initial state construction

use tracing::Span;

pub mod engine;
pub mod state;
pub mod step;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event at its documented level
    fn log(&self);

    /// Build a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
