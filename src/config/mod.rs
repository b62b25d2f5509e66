// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builder;
pub mod graph;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use builder::PipelineBuilder;
pub use graph::{Branch, Condition, PipelineGraph, Route, Target};
pub use loader::{
    load_pipeline, load_pipeline_config, BranchConfig, ConditionKind, ExecutorOptions,
    PipelineConfig, StepConfig,
};
pub use registry::StepRegistry;
pub use validation::validate_pipeline;
