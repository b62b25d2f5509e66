// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::{load_pipeline, load_pipeline_config, ConditionKind, Target};
use crate::errors::{ConfigError, ValidationError};
use crate::state::State;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

/// Test that the shipped YAML configurations parse
#[test]
fn test_learning_path_yaml_loading() {
    let config = load_pipeline_config("configs/learning-path.yaml").unwrap();

    assert_eq!(config.entry, "analyze");
    assert_eq!(config.executor_options.max_steps(), 10);
    assert_eq!(config.steps.len(), 4);
    assert_eq!(config.steps[0].kind, "analyze_student_data");
    assert_eq!(config.steps[3].next.as_deref(), Some("__end__"));
}

#[test]
fn test_revising_yaml_loading() {
    let config = load_pipeline_config("configs/revising-learning-path.yaml").unwrap();

    assert_eq!(config.executor_options.step_timeout_seconds, Some(30));
    let feedback = &config.steps[3];
    assert_eq!(feedback.branches.len(), 1);
    assert_eq!(feedback.branches[0].when, ConditionKind::RevisionsRemaining);
    assert_eq!(feedback.branches[0].to, "build_path");
    assert_eq!(feedback.default.as_deref(), Some("__end__"));

    let pipeline = config.build().unwrap();
    assert!(pipeline.warnings().is_empty());
    assert_eq!(
        pipeline.graph().successors("collect_feedback"),
        vec!["build_path"]
    );
}

/// Every shipped configuration builds and completes a run
#[tokio::test]
async fn test_shipped_configs_run_to_completion() {
    let cases = vec![
        ("configs/learning-path.yaml", 4, 2),
        ("configs/revising-learning-path.yaml", 6, 3),
        ("configs/suggested-topics.yaml", 4, 2),
    ];

    for (path, expected_steps, expected_revision) in cases {
        let pipeline = load_pipeline(path).unwrap();
        let mut run = pipeline.stream(State::new("S"));
        let mut steps = 0;
        while let Some(snapshot) = run.next_snapshot().await {
            snapshot.unwrap();
            steps += 1;
        }

        assert_eq!(steps, expected_steps, "{}", path);
        assert_eq!(run.state().revision_number(), expected_revision, "{}", path);
        assert!(!run.state().personalized_path().is_empty(), "{}", path);
    }
}

/// Suggested topics are kept in taxonomy order, not the order the response names them
#[tokio::test]
async fn test_suggested_topics_drive_the_path() {
    let pipeline = load_pipeline("configs/suggested-topics.yaml").unwrap();
    let state = pipeline.invoke(State::new("S")).await.unwrap();

    assert_eq!(
        state.learning_materials(),
        ["Probability Theory", "Hypothesis Testing", "Regression Analysis"]
    );
    assert_eq!(
        state.personalized_path(),
        "Probability Theory -> Hypothesis Testing -> Regression Analysis"
    );
    assert_eq!(state.feedback(), "Focus more on Regression Analysis.");
}

#[test]
fn test_load_from_temp_file() {
    let file = write_config(
        r#"
entry: only
steps:
  - id: only
    type: analyze_student_data
"#,
    );

    let pipeline = load_pipeline(file.path()).unwrap();
    assert_eq!(pipeline.graph().entry(), "only");
    assert_eq!(pipeline.graph().next("only", &State::default()), Target::End);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_pipeline(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

/// Validation failures surface through the loader with every error listed
#[test]
fn test_invalid_graph_from_yaml() {
    let file = write_config(
        r#"
entry: analyze
steps:
  - id: analyze
    type: analyze_student_data
    next: retreive
  - id: orphan
    type: collect_feedback
    next: analyze
"#,
    );

    match load_pipeline(file.path()) {
        Err(ConfigError::Validation(build_error)) => {
            assert!(build_error.errors.contains(&ValidationError::UnknownNode {
                node: "retreive".into(),
                edge: "analyze -> retreive".into(),
            }));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_unknown_step_kind_from_yaml() {
    let file = write_config(
        r#"
entry: a
steps:
  - id: a
    type: summarize
"#,
    );

    let err = load_pipeline(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Step 'a' has unknown type 'summarize'");
}
