// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A single pipeline run, stepped one snapshot at a time.
//!
//! # State machine
//!
//! ```text
//! Ready ──first next_snapshot()──► Running ──terminal reached──► Completed
//!                                     │
//!                                     └──step error / bad update / limit──► Failed
//! ```
//!
//! Each call to [`PipelineRun::next_snapshot`] executes exactly one step:
//! the step reads the current state, its update is merged, the merged state is
//! returned as a [`Snapshot`], and the route out of the step picks the next
//! one. A failing step's update is never merged. Once a run is `Completed` or
//! `Failed` it yields nothing further and cannot be restarted. Dropping the
//! run cancels it; it holds no other resources.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::config::Target;
use crate::engine::Pipeline;
use crate::errors::ExecutionError;
use crate::observability::messages::engine::{RunCompleted, RunFailed, RunStarted};
use crate::observability::messages::step::{StepCompleted, StepFailed, StepStarted};
use crate::observability::messages::StructuredLog;
use crate::state::{Field, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Created, no step has executed
    Ready,
    /// At least one step executed and a next step is pending
    Running,
    /// The terminal sentinel was reached
    Completed,
    /// A step failed or the run was aborted
    Failed,
}

/// The state as it stood right after one step was merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Step that produced this snapshot
    pub step: String,
    /// Zero-based position in the run
    pub sequence: usize,
    pub state: State,
}

pub struct PipelineRun<'p> {
    pipeline: &'p Pipeline,
    state: State,
    current: Option<String>,
    status: RunStatus,
    steps_executed: usize,
    started_at: Option<Instant>,
}

impl<'p> PipelineRun<'p> {
    pub(crate) fn new(pipeline: &'p Pipeline, initial: State) -> Self {
        Self {
            pipeline,
            state: initial,
            current: Some(pipeline.graph().entry().to_string()),
            status: RunStatus::Ready,
            steps_executed: 0,
            started_at: None,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn steps_executed(&self) -> usize {
        self.steps_executed
    }

    /// Step that the next call will execute, if any
    pub fn current_step(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// State after the last successfully merged step
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Execute the next step and return the merged state.
    ///
    /// Returns `None` once the run has completed or failed.
    pub async fn next_snapshot(&mut self) -> Option<Result<Snapshot, ExecutionError>> {
        match self.status {
            RunStatus::Completed | RunStatus::Failed => return None,
            RunStatus::Ready => self.start(),
            RunStatus::Running => {}
        }

        let step_name = self.current.clone()?;
        Some(self.execute(step_name).await)
    }

    /// Drain the run and return the final state.
    ///
    /// A run that fails yields its error instead; partial state is never
    /// returned as if it were complete.
    pub async fn finish(mut self) -> Result<State, ExecutionError> {
        while let Some(snapshot) = self.next_snapshot().await {
            snapshot?;
        }

        match self.status {
            RunStatus::Failed => Err(ExecutionError::RunAlreadyFailed {
                steps_executed: self.steps_executed,
            }),
            _ => Ok(self.state),
        }
    }

    fn start(&mut self) {
        RunStarted {
            entry: self.pipeline.graph().entry(),
            step_count: self.pipeline.registry().len(),
            max_steps: self.pipeline.options().max_steps(),
        }
        .log();
        self.started_at = Some(Instant::now());
        self.status = RunStatus::Running;
    }

    async fn execute(&mut self, step_name: String) -> Result<Snapshot, ExecutionError> {
        let pipeline = self.pipeline;

        let limit = pipeline.options().max_steps();
        if self.steps_executed >= limit {
            return Err(self.fail(ExecutionError::StepLimitExceeded { limit }));
        }

        let step = match pipeline.registry().get(&step_name) {
            Some(step) => Arc::clone(step),
            None => return Err(self.fail(ExecutionError::StepNotFound(step_name))),
        };

        let sequence = self.steps_executed;
        let start_msg = StepStarted {
            step: &step_name,
            sequence,
        };
        let span = start_msg.span("step_execution");
        start_msg.log();

        let started = Instant::now();
        let outcome = match pipeline.options().step_timeout() {
            Some(timeout) => {
                match tokio::time::timeout(timeout, step.run(&self.state).instrument(span)).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        return Err(self.fail(ExecutionError::StepTimedOut {
                            step: step_name,
                            timeout,
                        }))
                    }
                }
            }
            None => step.run(&self.state).instrument(span).await,
        };

        let update = match outcome {
            Ok(update) => update,
            Err(source) => {
                StepFailed {
                    step: &step_name,
                    sequence,
                    error: &source,
                }
                .log();
                return Err(self.fail(ExecutionError::StepFailed {
                    step: step_name,
                    source,
                }));
            }
        };

        let fields: Vec<&str> = update.fields().iter().map(Field::as_str).collect();
        if let Err(source) = self.state.merge(update) {
            return Err(self.fail(ExecutionError::InvalidUpdate {
                step: step_name,
                source,
            }));
        }
        self.steps_executed += 1;

        StepCompleted {
            step: &step_name,
            sequence,
            fields: &fields,
            duration: started.elapsed(),
        }
        .log();

        match pipeline.graph().next(&step_name, &self.state) {
            Target::End => {
                self.status = RunStatus::Completed;
                self.current = None;
                RunCompleted {
                    steps_executed: self.steps_executed,
                    revision_number: self.state.revision_number(),
                    duration: self.started_at.map(|t| t.elapsed()).unwrap_or_default(),
                }
                .log();
            }
            Target::Step(next) => self.current = Some(next),
        }

        Ok(Snapshot {
            step: step_name,
            sequence,
            state: self.state.clone(),
        })
    }

    fn fail(&mut self, error: ExecutionError) -> ExecutionError {
        self.status = RunStatus::Failed;
        self.current = None;
        RunFailed {
            step: error.step(),
            steps_executed: self.steps_executed,
            error: &error,
        }
        .log();
        error
    }
}

impl std::fmt::Debug for PipelineRun<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineRun")
            .field("status", &self.status)
            .field("current", &self.current)
            .field("steps_executed", &self.steps_executed)
            .finish()
    }
}
