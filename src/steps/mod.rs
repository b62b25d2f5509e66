// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in steps for the learning-path domain.

pub mod analyze;
pub mod build_path;
pub mod collect_feedback;
pub mod factory;
pub mod retrieve;
pub mod suggest_topics;

pub use analyze::AnalyzeStudentDataStep;
pub use build_path::BuildLearningPathStep;
pub use collect_feedback::CollectFeedbackStep;
pub use factory::StepFactory;
pub use retrieve::RetrieveMaterialsStep;
pub use suggest_topics::SuggestTopicsStep;
