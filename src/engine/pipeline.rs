// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{ExecutorOptions, PipelineGraph, StepRegistry};
use crate::engine::run::PipelineRun;
use crate::errors::{ExecutionError, ValidationWarning};
use crate::state::State;

/// A validated pipeline: registered steps, their graph, and run limits.
///
/// A pipeline is immutable once built and holds no run data, so any number of
/// runs may be started from it. Each run owns its own [`State`].
///
/// # Examples
///
/// ```
/// use learning_pathway::presets::learning_path_pipeline;
/// use learning_pathway::state::State;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = learning_path_pipeline()?;
/// let final_state = pipeline.invoke(State::new("Weak in Abstract Algebra")).await?;
///
/// assert_eq!(final_state.revision_number(), 2);
/// assert!(!final_state.personalized_path().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline {
    registry: StepRegistry,
    graph: PipelineGraph,
    options: ExecutorOptions,
    warnings: Vec<ValidationWarning>,
}

impl Pipeline {
    pub(crate) fn new(
        registry: StepRegistry,
        graph: PipelineGraph,
        options: ExecutorOptions,
        warnings: Vec<ValidationWarning>,
    ) -> Self {
        Self {
            registry,
            graph,
            options,
            warnings,
        }
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &PipelineGraph {
        &self.graph
    }

    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Non-fatal findings from validation, such as unreachable steps
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Start a run. Nothing executes until the first snapshot is requested.
    pub fn stream(&self, initial: State) -> PipelineRun<'_> {
        PipelineRun::new(self, initial)
    }

    /// Run to completion and return only the final state
    pub async fn invoke(&self, initial: State) -> Result<State, ExecutionError> {
        self.stream(initial).finish().await
    }
}
