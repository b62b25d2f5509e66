// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::StepError;
use crate::state::{State, StateUpdate};

/// A named unit of work in a pipeline.
///
/// A step reads the current snapshot through a shared reference and returns
/// the fields it wants changed. It never writes to the state itself; the
/// executor merges the returned update after the step succeeds. A failed step
/// contributes nothing.
#[async_trait]
pub trait Step: Send + Sync {
    async fn run(&self, state: &State) -> Result<StateUpdate, StepError>;

    /// Kind of the step implementation, used in logs
    fn name(&self) -> &'static str;
}
