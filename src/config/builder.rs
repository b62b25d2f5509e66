// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::graph::{Branch, Route, Target};
use crate::config::validation::validate_pipeline;
use crate::config::{ExecutorOptions, StepRegistry};
use crate::engine::Pipeline;
use crate::errors::BuildError;
use crate::traits::Step;

/// Assembles steps and routes into a validated, immutable [`Pipeline`].
///
/// Declarations are recorded as-is and only checked by [`PipelineBuilder::build`],
/// which reports every problem at once. No run can start from a builder.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use learning_pathway::config::{consts::END, PipelineBuilder};
/// use learning_pathway::steps::{AnalyzeStudentDataStep, RetrieveMaterialsStep};
///
/// let pipeline = PipelineBuilder::new()
///     .add_step("analyze", Arc::new(AnalyzeStudentDataStep::default()))
///     .add_step("retrieve", Arc::new(RetrieveMaterialsStep::default()))
///     .add_edge("analyze", "retrieve")
///     .add_edge("retrieve", END)
///     .set_entry("analyze")
///     .build()
///     .unwrap();
///
/// assert_eq!(pipeline.graph().entry(), "analyze");
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    registry: StepRegistry,
    routes: Vec<(String, Route)>,
    entry: Option<String>,
    options: ExecutorOptions,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a step; a repeated name replaces the earlier step
    pub fn add_step(mut self, name: impl Into<String>, step: Arc<dyn Step>) -> Self {
        self.registry.register(name, step);
        self
    }

    /// Unconditionally continue from `from` to `to` (a step name or `END`)
    pub fn add_edge(mut self, from: impl Into<String>, to: impl Into<Target>) -> Self {
        self.routes.push((from.into(), Route::Next(to.into())));
        self
    }

    /// Continue from `from` to the first branch whose condition holds, or to `default`
    pub fn add_conditional_edges(
        mut self,
        from: impl Into<String>,
        branches: Vec<Branch>,
        default: impl Into<Target>,
    ) -> Self {
        self.routes.push((
            from.into(),
            Route::Conditional {
                branches,
                default: default.into(),
            },
        ));
        self
    }

    pub fn set_entry(mut self, name: impl Into<String>) -> Self {
        self.entry = Some(name.into());
        self
    }

    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Pipeline, BuildError> {
        let (graph, warnings) =
            validate_pipeline(&self.registry, self.entry.as_deref(), self.routes)?;
        Ok(Pipeline::new(self.registry, graph, self.options, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::END;
    use crate::errors::ValidationError;
    use crate::steps::{AnalyzeStudentDataStep, CollectFeedbackStep};

    #[test]
    fn edge_to_unregistered_step_fails_build() {
        let result = PipelineBuilder::new()
            .add_step("analyze", Arc::new(AnalyzeStudentDataStep::default()))
            .add_edge("analyze", "retrieve")
            .set_entry("analyze")
            .build();

        let err = result.err().expect("build should fail");
        assert!(err.has_unknown_node());
        assert_eq!(
            err.errors,
            vec![ValidationError::UnknownNode {
                node: "retrieve".into(),
                edge: "analyze -> retrieve".into(),
            }]
        );
    }

    #[test]
    fn end_cannot_be_a_step_name() {
        let result = PipelineBuilder::new()
            .add_step(END, Arc::new(AnalyzeStudentDataStep::default()))
            .set_entry(END)
            .build();

        let err = result.err().expect("build should fail");
        assert_eq!(err.errors, vec![ValidationError::ReservedStepName(END.into())]);
    }

    #[test]
    fn single_step_without_edges_builds() {
        let pipeline = PipelineBuilder::new()
            .add_step("only", Arc::new(CollectFeedbackStep::default()))
            .set_entry("only")
            .build()
            .unwrap();

        assert!(pipeline.warnings().is_empty());
        assert_eq!(pipeline.graph().next("only", &Default::default()), Target::End);
    }

    #[test]
    fn explicit_end_and_options_are_kept() {
        let pipeline = PipelineBuilder::new()
            .add_step("analyze", Arc::new(AnalyzeStudentDataStep::default()))
            .add_edge("analyze", END)
            .set_entry("analyze")
            .with_options(ExecutorOptions {
                max_steps: Some(3),
                step_timeout_seconds: None,
            })
            .build()
            .unwrap();

        assert_eq!(pipeline.options().max_steps(), 3);
    }
}
