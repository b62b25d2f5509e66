// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::StepConfig;
use crate::errors::ConfigError;
use crate::suggest::CannedSuggestions;
use crate::traits::Step;

use super::*;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalyzeOptions {
    marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetrieveOptions {
    materials: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeedbackOptions {
    feedback: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuggestOptions {
    response: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoOptions {}

/// Factory for creating step instances from configuration
pub struct StepFactory;

impl StepFactory {
    /// Create a step instance from configuration
    ///
    /// The `type` field in the config determines which step to create:
    /// - "analyze_student_data" -> AnalyzeStudentDataStep (option: `marker`)
    /// - "retrieve_learning_materials" -> RetrieveMaterialsStep (option: `materials`)
    /// - "build_learning_path" -> BuildLearningPathStep
    /// - "collect_feedback" -> CollectFeedbackStep (option: `feedback`)
    /// - "suggest_topics" -> SuggestTopicsStep backed by canned suggestions (option: `response`)
    pub fn create_step(config: &StepConfig) -> Result<Arc<dyn Step>, ConfigError> {
        match config.kind.as_str() {
            "analyze_student_data" => {
                let options: AnalyzeOptions = parse_options(config)?;
                Ok(Arc::new(match options.marker {
                    Some(marker) => AnalyzeStudentDataStep::with_marker(marker),
                    None => AnalyzeStudentDataStep::default(),
                }))
            }
            "retrieve_learning_materials" => {
                let options: RetrieveOptions = parse_options(config)?;
                Ok(Arc::new(match options.materials {
                    Some(materials) => RetrieveMaterialsStep::new(materials),
                    None => RetrieveMaterialsStep::default(),
                }))
            }
            "build_learning_path" => {
                parse_options::<NoOptions>(config)?;
                Ok(Arc::new(BuildLearningPathStep::default()))
            }
            "collect_feedback" => {
                let options: FeedbackOptions = parse_options(config)?;
                Ok(Arc::new(match options.feedback {
                    Some(feedback) => CollectFeedbackStep::with_feedback(feedback),
                    None => CollectFeedbackStep::default(),
                }))
            }
            "suggest_topics" => {
                let options: SuggestOptions = parse_options(config)?;
                let service = match options.response {
                    Some(response) => CannedSuggestions::new(response),
                    None => CannedSuggestions::default(),
                };
                Ok(Arc::new(SuggestTopicsStep::new(Arc::new(service))))
            }
            _ => Err(ConfigError::UnknownStepKind {
                id: config.id.clone(),
                kind: config.kind.clone(),
            }),
        }
    }

    /// List all available step kinds
    pub fn available_kinds() -> Vec<&'static str> {
        vec![
            "analyze_student_data",
            "retrieve_learning_materials",
            "build_learning_path",
            "collect_feedback",
            "suggest_topics",
        ]
    }

    pub fn is_kind_available(kind: &str) -> bool {
        Self::available_kinds().contains(&kind)
    }
}

fn parse_options<T: DeserializeOwned>(config: &StepConfig) -> Result<T, ConfigError> {
    let mapping: serde_yaml::Mapping = config
        .options
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.clone()), value.clone()))
        .collect();

    serde_yaml::from_value(serde_yaml::Value::Mapping(mapping)).map_err(|e| {
        ConfigError::InvalidOptions {
            id: config.id.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;
    use std::collections::HashMap;

    fn step_config(kind: &str, options: &str) -> StepConfig {
        let options: HashMap<String, serde_yaml::Value> = if options.is_empty() {
            HashMap::new()
        } else {
            serde_yaml::from_str(options).unwrap()
        };
        StepConfig {
            id: "node".to_string(),
            kind: kind.to_string(),
            next: None,
            branches: Vec::new(),
            default: None,
            options,
        }
    }

    #[test]
    fn creates_every_available_kind() {
        for kind in StepFactory::available_kinds() {
            let step = StepFactory::create_step(&step_config(kind, "")).unwrap();
            assert_eq!(step.name(), kind);
            assert!(StepFactory::is_kind_available(kind));
        }
    }

    #[test]
    fn unknown_kind() {
        let err = StepFactory::create_step(&step_config("summarize", ""))
            .err()
            .expect("unknown kind should fail");
        assert!(matches!(
            err,
            ConfigError::UnknownStepKind { ref id, ref kind } if id == "node" && kind == "summarize"
        ));
    }

    #[test]
    fn invalid_options() {
        let cases = vec![
            ("retrieve_learning_materials", "materials: 3"),
            ("analyze_student_data", "prefix: '>>'"),
            ("build_learning_path", "anything: true"),
        ];

        for (kind, options) in cases {
            let err = StepFactory::create_step(&step_config(kind, options))
                .err()
                .expect("invalid options should fail");
            assert!(
                matches!(err, ConfigError::InvalidOptions { ref id, .. } if id == "node"),
                "{} with {:?} should be rejected, got {:?}",
                kind,
                options,
                err
            );
        }
    }

    #[tokio::test]
    async fn options_reach_the_step() {
        let step = StepFactory::create_step(&step_config(
            "retrieve_learning_materials",
            "materials: ['PDF on Limits']",
        ))
        .unwrap();

        let mut state = State::new("S");
        state.merge(step.run(&state).await.unwrap()).unwrap();
        assert_eq!(state.learning_materials(), ["PDF on Limits"]);

        let step =
            StepFactory::create_step(&step_config("analyze_student_data", "marker: ' #'")).unwrap();
        let mut state = State::new("S");
        state.merge(step.run(&state).await.unwrap()).unwrap();
        assert_eq!(state.student_data(), "S #");
    }
}
