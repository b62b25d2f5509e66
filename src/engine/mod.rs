// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod pipeline;
pub mod run;

pub use pipeline::Pipeline;
pub use run::{PipelineRun, RunStatus, Snapshot};
