// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Unknown step references on edges
//! * Steps unreachable from the entry
//! * Validation failures as a whole

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Edge references a step that was never registered.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use learning_pathway::observability::messages::validation::UnknownNodeDetected;
///
/// let msg = UnknownNodeDetected {
///     node: "ghost",
///     edge: "analyze -> ghost",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnknownNodeDetected<'a> {
    pub node: &'a str,
    pub edge: &'a str,
}

impl Display for UnknownNodeDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Edge '{}' references unknown step '{}'",
            self.edge, self.node
        )
    }
}

impl StructuredLog for UnknownNodeDetected<'_> {
    fn log(&self) {
        tracing::error!(node = self.node, edge = self.edge, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            node = self.node,
            edge = self.edge,
        )
    }
}

/// Registered step is not reachable from the entry.
///
/// # Log Level
/// `warn!` - Tolerated, the pipeline still builds
pub struct UnreachableStepDetected<'a> {
    pub step: &'a str,
    pub entry: &'a str,
}

impl Display for UnreachableStepDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step '{}' is not reachable from entry step '{}'",
            self.step, self.entry
        )
    }
}

impl StructuredLog for UnreachableStepDetected<'_> {
    fn log(&self) {
        tracing::warn!(step = self.step, entry = self.entry, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            step = self.step,
            entry = self.entry,
        )
    }
}

/// Validation rejected the pipeline.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline validation failed with {} error(s)",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error_count = self.error_count,
        )
    }
}
