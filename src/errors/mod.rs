// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod state;
mod step;

pub use config::{BuildError, ConfigError, ValidationError, ValidationWarning};
pub use execution::ExecutionError;
pub use state::{MergeError, StateInitError};
pub use step::StepError;
