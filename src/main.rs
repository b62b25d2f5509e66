// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use learning_pathway::config::load_pipeline;
use learning_pathway::engine::Pipeline;
use learning_pathway::presets::{learning_path_pipeline, revising_learning_path_pipeline};
use learning_pathway::state::State;

struct Args {
    config: Option<String>,
    revise: bool,
    input: String,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--config <pipeline.yaml>] [--loop] <student_data | json_state>\n\
         Example: {} \"Weak in Abstract Algebra\"\n\
         Example: {} --config configs/revising-learning-path.yaml '{{\"student_data\": \"S\"}}'",
        program, program, program
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let program = args.first().map(String::as_str).unwrap_or("learning-pathway");
    let mut config = None;
    let mut revise = false;
    let mut input = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let path = rest
                    .next()
                    .with_context(|| format!("--config needs a path\n{}", usage(program)))?;
                config = Some(path.clone());
            }
            "--loop" => revise = true,
            _ if input.is_none() => input = Some(arg.clone()),
            _ => bail!("Unexpected argument '{}'\n{}", arg, usage(program)),
        }
    }

    match input {
        Some(input) => Ok(Args {
            config,
            revise,
            input,
        }),
        None => bail!("{}", usage(program)),
    }
}

fn select_pipeline(args: &Args) -> Result<Pipeline> {
    if let Some(path) = &args.config {
        return load_pipeline(path).with_context(|| format!("Failed to load pipeline from {}", path));
    }
    let pipeline = if args.revise {
        revising_learning_path_pipeline()?
    } else {
        learning_path_pipeline()?
    };
    Ok(pipeline)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;
    let pipeline = select_pipeline(&args)?;

    for warning in pipeline.warnings() {
        eprintln!("⚠️  {}", warning);
    }

    println!("🚀 Learning Path Pipeline");
    println!("═════════════════════════");
    println!("Entry: {}", pipeline.graph().entry());
    println!();

    let start = Instant::now();
    let mut run = pipeline.stream(State::from_input(&args.input));
    while let Some(snapshot) = run.next_snapshot().await {
        let snapshot = snapshot?;
        println!("📸 [{}] {}", snapshot.sequence, snapshot.step);
        println!("{}", serde_json::to_string_pretty(&snapshot.state)?);
    }

    let final_state = run.state();
    println!("\n{}", "─".repeat(60));
    println!("✅ Completed {} steps in {:?}", run.steps_executed(), start.elapsed());
    println!("🧭 Path: {}", final_state.personalized_path());
    println!("💬 Feedback: {}", final_state.feedback());
    println!("🔁 Revision: {}", final_state.revision_number());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_flags_and_input() {
        let parsed = parse_args(&args(&["lp", "--loop", "--config", "p.yaml", "S"])).unwrap();
        assert!(parsed.revise);
        assert_eq!(parsed.config.as_deref(), Some("p.yaml"));
        assert_eq!(parsed.input, "S");
    }

    #[test]
    fn parse_rejects_missing_or_extra_input() {
        assert!(parse_args(&args(&["lp"])).is_err());
        assert!(parse_args(&args(&["lp", "a", "b"])).is_err());
        assert!(parse_args(&args(&["lp", "--config"])).is_err());
    }
}
