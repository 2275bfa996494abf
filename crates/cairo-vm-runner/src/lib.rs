//! Hint execution engine of the Cairo VM.
//!
//! A hint is a host-side computation that writes nondeterministic advice into memory. This
//! crate executes the core hint library against a [`Memory`] and an [`ExecutionContext`].

use cairo_vm_hints::hints::Hint;
use cairo_vm_memory::Memory;
use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub use crate::config::HintRunnerConfig;
pub use crate::context::{ExecutionContext, ExecutionScopes, ScopeValue};
pub use crate::errors::HintError;

pub mod config;
pub mod context;
pub mod errors;
pub mod hint_run;

#[cfg(test)]
mod test;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunnerError {
    #[error("Hint `{hint}` failed: {source}")]
    Hint { hint: &'static str, source: HintError },
}

/// Executes hints on behalf of the VM.
pub trait HintProcessor {
    /// Executes a single hint, writing its results to `memory`.
    fn execute_hint(
        &mut self,
        memory: &mut Memory,
        ctx: &mut ExecutionContext,
        hint: &Hint,
    ) -> Result<(), RunnerError>;
}

/// A hint processor for the core hint library.
#[derive(Debug)]
pub struct CoreHintProcessor {
    config: HintRunnerConfig,
    /// The generator `RandomEcPoint` samples from.
    rng: ChaCha8Rng,
}
impl CoreHintProcessor {
    pub fn new(config: HintRunnerConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.random_ec_point_seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &HintRunnerConfig {
        &self.config
    }
}
impl Default for CoreHintProcessor {
    fn default() -> Self {
        Self::new(HintRunnerConfig::default())
    }
}
impl HintProcessor for CoreHintProcessor {
    fn execute_hint(
        &mut self,
        memory: &mut Memory,
        ctx: &mut ExecutionContext,
        hint: &Hint,
    ) -> Result<(), RunnerError> {
        trace!("Executing hint: {hint}");
        hint_run::execute_core_hint(memory, ctx, hint, &self.config, &mut self.rng)
            .map_err(|source| RunnerError::Hint { hint: hint.name(), source })
    }
}
