// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ready-made learning-path pipelines.
//!
//! ```text
//! analyze ──► retrieve ──► build_path ──► collect_feedback ──► END
//!                              ▲                 │
//!                              └─ revisions_remaining (revising preset only)
//! ```

use std::sync::Arc;

use crate::config::consts::END;
use crate::config::{Branch, ConditionKind, PipelineBuilder};
use crate::engine::Pipeline;
use crate::errors::BuildError;
use crate::steps::{
    AnalyzeStudentDataStep, BuildLearningPathStep, CollectFeedbackStep, RetrieveMaterialsStep,
};

pub const ANALYZE: &str = "analyze";
pub const RETRIEVE: &str = "retrieve";
pub const BUILD_PATH: &str = "build_path";
pub const COLLECT_FEEDBACK: &str = "collect_feedback";

fn chain() -> PipelineBuilder {
    PipelineBuilder::new()
        .add_step(ANALYZE, Arc::new(AnalyzeStudentDataStep::default()))
        .add_step(RETRIEVE, Arc::new(RetrieveMaterialsStep::default()))
        .add_step(BUILD_PATH, Arc::new(BuildLearningPathStep::default()))
        .add_step(COLLECT_FEEDBACK, Arc::new(CollectFeedbackStep::default()))
        .set_entry(ANALYZE)
        .add_edge(ANALYZE, RETRIEVE)
        .add_edge(RETRIEVE, BUILD_PATH)
        .add_edge(BUILD_PATH, COLLECT_FEEDBACK)
}

/// The four-step chain; `collect_feedback` ends the run
pub fn learning_path_pipeline() -> Result<Pipeline, BuildError> {
    chain().add_edge(COLLECT_FEEDBACK, END).build()
}

/// The four-step chain with a revision loop.
///
/// After feedback, the path is rebuilt while `revision_number` has not passed
/// `max_revisions`, so a run starting at revision 1 with the default of 2
/// revisions builds the path twice.
pub fn revising_learning_path_pipeline() -> Result<Pipeline, BuildError> {
    chain()
        .add_conditional_edges(
            COLLECT_FEEDBACK,
            vec![Branch::new(
                ConditionKind::RevisionsRemaining.condition(),
                BUILD_PATH,
            )],
            END,
        )
        .build()
}
