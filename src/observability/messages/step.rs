// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for step execution and registration events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Step invoked with the current snapshot.
///
/// # Log Level
/// `debug!` - Per-step detail
pub struct StepStarted<'a> {
    pub step: &'a str,
    pub sequence: usize,
}

impl Display for StepStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Step '{}' started (sequence {})", self.step, self.sequence)
    }
}

impl StructuredLog for StepStarted<'_> {
    fn log(&self) {
        tracing::debug!(step = self.step, sequence = self.sequence, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "step",
            span_name = name,
            step = self.step,
            sequence = self.sequence,
        )
    }
}

/// Step returned and its update was merged.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use learning_pathway::observability::messages::step::StepCompleted;
/// use std::time::Duration;
///
/// let fields = ["feedback", "revision_number"];
/// let msg = StepCompleted {
///     step: "collect_feedback",
///     sequence: 3,
///     fields: &fields,
///     duration: Duration::from_micros(40),
/// };
///
/// assert!(msg.to_string().contains("feedback, revision_number"));
/// ```
pub struct StepCompleted<'a> {
    pub step: &'a str,
    pub sequence: usize,
    pub fields: &'a [&'a str],
    pub duration: std::time::Duration,
}

impl Display for StepCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step '{}' completed in {:?}: updated [{}]",
            self.step,
            self.duration,
            self.fields.join(", ")
        )
    }
}

impl StructuredLog for StepCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            step = self.step,
            sequence = self.sequence,
            fields = self.fields.join(","),
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "step_completed",
            span_name = name,
            step = self.step,
            sequence = self.sequence,
            duration = ?self.duration,
        )
    }
}

/// Step failed; its output is discarded.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StepFailed<'a> {
    pub step: &'a str,
    pub sequence: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for StepFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Step '{}' failed: {}", self.step, self.error)
    }
}

impl StructuredLog for StepFailed<'_> {
    fn log(&self) {
        tracing::error!(
            step = self.step,
            sequence = self.sequence,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "step_failed",
            span_name = name,
            step = self.step,
            sequence = self.sequence,
            error = %self.error,
        )
    }
}

/// A step name was registered a second time; the new body replaces the old one.
///
/// # Log Level
/// `warn!` - Suspicious but tolerated
pub struct StepReplaced<'a> {
    pub step: &'a str,
    pub previous_kind: &'a str,
    pub kind: &'a str,
}

impl Display for StepReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step '{}' re-registered: '{}' replaces '{}'",
            self.step, self.kind, self.previous_kind
        )
    }
}

impl StructuredLog for StepReplaced<'_> {
    fn log(&self) {
        tracing::warn!(
            step = self.step,
            previous_kind = self.previous_kind,
            kind = self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "step_replaced",
            span_name = name,
            step = self.step,
            kind = self.kind,
        )
    }
}
