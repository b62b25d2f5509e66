// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::PATH_SEPARATOR;
use crate::errors::StepError;
use crate::state::{State, StateUpdate};
use crate::taxonomy::Taxonomy;
use crate::traits::Step;

const FOCUS_SUFFIX: &str = " (focus)";

/// Synthesizes `personalized_path` from the materials and learner description.
///
/// Topics are taken from `learning_materials` in the order they are first
/// mentioned. If no material names a known topic, topics named in
/// `student_data` are used, and failing that the materials themselves. Topics
/// called out in the latest `feedback` are marked for focus, so re-running the
/// step after feedback revises the path.
#[derive(Debug, Clone, Default)]
pub struct BuildLearningPathStep {
    taxonomy: Taxonomy,
}

impl BuildLearningPathStep {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    fn topics_from_materials(&self, materials: &[String]) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for material in materials {
            for topic in self.taxonomy.match_topics(material) {
                if !topics.contains(&topic) {
                    topics.push(topic);
                }
            }
        }
        topics
    }
}

#[async_trait]
impl Step for BuildLearningPathStep {
    async fn run(&self, state: &State) -> Result<StateUpdate, StepError> {
        let mut topics = self.topics_from_materials(state.learning_materials());
        if topics.is_empty() {
            topics = self.taxonomy.mentioned_topics(state.student_data());
        }
        if topics.is_empty() {
            topics = state.learning_materials().to_vec();
        }
        if topics.is_empty() {
            return Err(StepError::message(
                "no learning materials or recognizable topics to build a path from",
            ));
        }

        let feedback = state.feedback();
        let path = topics
            .iter()
            .map(|topic| {
                if feedback.contains(topic.as_str()) {
                    format!("{}{}", topic, FOCUS_SUFFIX)
                } else {
                    topic.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR);

        Ok(StateUpdate::new().personalized_path(path))
    }

    fn name(&self) -> &'static str {
        "build_learning_path"
    }
}

/// Topic labels of a rendered path, without focus markers
pub fn path_topics(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR)
        .map(|segment| segment.trim().trim_end_matches(FOCUS_SUFFIX))
        .filter(|segment| !segment.is_empty())
        .collect()
}
