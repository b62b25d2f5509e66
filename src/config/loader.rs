// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::consts::DEFAULT_MAX_STEPS;
use crate::config::graph::{Branch, Condition};
use crate::config::PipelineBuilder;
use crate::engine::Pipeline;
use crate::errors::ConfigError;
use crate::steps::StepFactory;

/// A pipeline definition, typically loaded from a YAML file.
///
/// # Fields
/// * `entry` - Name of the first step to run
/// * `executor_options` - Run limits (optional)
/// * `steps` - Step declarations; each names its kind and outgoing route
///
/// # Example
/// ```yaml
/// entry: analyze
/// executor_options:
///   max_steps: 10
/// steps:
///   - id: analyze
///     type: analyze_student_data
///     next: retrieve
///   - id: retrieve
///     type: retrieve_learning_materials
/// ```
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub entry: String,
    #[serde(default)]
    pub executor_options: ExecutorOptions,
    pub steps: Vec<StepConfig>,
}

/// Executor run limits.
///
/// # Fields
/// * `max_steps` - Maximum steps executed in one run (defaults to 25)
/// * `step_timeout_seconds` - Timeout for each individual step (optional, unbounded if unset)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExecutorOptions {
    pub max_steps: Option<usize>,
    pub step_timeout_seconds: Option<u64>,
}

impl ExecutorOptions {
    pub fn max_steps(&self) -> usize {
        self.max_steps.unwrap_or(DEFAULT_MAX_STEPS)
    }

    pub fn step_timeout(&self) -> Option<Duration> {
        self.step_timeout_seconds.map(Duration::from_secs)
    }
}

/// Configuration for a single step node.
///
/// # Fields
/// * `id` - Unique step name within the pipeline
/// * `kind` - Implementation to instantiate (see `StepFactory`)
/// * `next` - Unconditional successor, a step name or `__end__`
/// * `branches` - Ordered conditional successors; first match wins
/// * `default` - Successor when no branch matches (required with `branches`)
/// * `options` - Step-specific options
///
/// # Example
/// ```yaml
/// id: collect_feedback
/// type: collect_feedback
/// branches:
///   - when: revisions_remaining
///     to: build_path
/// default: __end__
/// ```
#[derive(Debug, Deserialize)]
pub struct StepConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub next: Option<String>,
    #[serde(default)]
    pub branches: Vec<BranchConfig>,
    pub default: Option<String>,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
pub struct BranchConfig {
    pub when: ConditionKind,
    pub to: String,
}

/// Named predicates available to YAML branches.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// `revision_number <= max_revisions`
    RevisionsRemaining,
    /// `feedback` is non-empty
    FeedbackPresent,
    /// `personalized_path` is empty
    PathEmpty,
}

impl ConditionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::RevisionsRemaining => "revisions_remaining",
            ConditionKind::FeedbackPresent => "feedback_present",
            ConditionKind::PathEmpty => "path_empty",
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            ConditionKind::RevisionsRemaining => {
                Condition::new(self.label(), |s| s.revisions_remaining())
            }
            ConditionKind::FeedbackPresent => {
                Condition::new(self.label(), |s| !s.feedback().is_empty())
            }
            ConditionKind::PathEmpty => {
                Condition::new(self.label(), |s| s.personalized_path().is_empty())
            }
        }
    }
}

impl PipelineConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Instantiate every step and validate the resulting graph
    pub fn build(&self) -> Result<Pipeline, ConfigError> {
        let mut builder = PipelineBuilder::new()
            .set_entry(self.entry.clone())
            .with_options(self.executor_options.clone());

        for step in &self.steps {
            builder = builder.add_step(step.id.clone(), StepFactory::create_step(step)?);

            match (&step.next, step.branches.is_empty()) {
                (Some(_), false) => return Err(ConfigError::ConflictingRoutes(step.id.clone())),
                (Some(next), true) => builder = builder.add_edge(step.id.clone(), next.clone()),
                (None, false) => {
                    let default = step
                        .default
                        .clone()
                        .ok_or_else(|| ConfigError::MissingBranchDefault(step.id.clone()))?;
                    let branches = step
                        .branches
                        .iter()
                        .map(|b| Branch::new(b.when.condition(), b.to.clone()))
                        .collect();
                    builder = builder.add_conditional_edges(step.id.clone(), branches, default);
                }
                (None, true) => {
                    if let Some(default) = &step.default {
                        builder = builder.add_edge(step.id.clone(), default.clone());
                    }
                }
            }
        }

        Ok(builder.build()?)
    }
}

/// Load a pipeline definition from a YAML file
pub fn load_pipeline_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    PipelineConfig::from_yaml(&content)
}

/// Load a pipeline definition and build it in one call
pub fn load_pipeline<P: AsRef<Path>>(path: P) -> Result<Pipeline, ConfigError> {
    load_pipeline_config(path)?.build()
}
