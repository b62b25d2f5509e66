// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Run start, with the entry step and step budget
//! * Run completion, with the number of steps executed
//! * Run failure, with the offending step and cause

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Run started from the entry step.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use learning_pathway::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     entry: "analyze",
///     step_count: 4,
///     max_steps: 25,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub entry: &'a str,
    pub step_count: usize,
    pub max_steps: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run at '{}': {} registered steps, max_steps={}",
            self.entry, self.step_count, self.max_steps
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            entry = self.entry,
            step_count = self.step_count,
            max_steps = self.max_steps,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            entry = self.entry,
            step_count = self.step_count,
            max_steps = self.max_steps,
        )
    }
}

/// Run reached the terminal sentinel.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use learning_pathway::observability::messages::engine::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     steps_executed: 4,
///     revision_number: 2,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunCompleted {
    pub steps_executed: usize,
    pub revision_number: u32,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: {} steps in {:?}, revision_number={}",
            self.steps_executed, self.duration, self.revision_number
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            steps_executed = self.steps_executed,
            revision_number = self.revision_number,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            steps_executed = self.steps_executed,
            revision_number = self.revision_number,
            duration = ?self.duration,
        )
    }
}

/// Run failed and will emit no further snapshots.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunFailed<'a> {
    pub step: Option<&'a str>,
    pub steps_executed: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for RunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.step {
            Some(step) => write!(
                f,
                "Pipeline run failed at step '{}' after {} steps: {}",
                step, self.steps_executed, self.error
            ),
            None => write!(
                f,
                "Pipeline run failed after {} steps: {}",
                self.steps_executed, self.error
            ),
        }
    }
}

impl StructuredLog for RunFailed<'_> {
    fn log(&self) {
        tracing::error!(
            step = self.step,
            steps_executed = self.steps_executed,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "run_failed",
            span_name = name,
            step = self.step,
            steps_executed = self.steps_executed,
            error = %self.error,
        )
    }
}
