//! Executor seam. The core never performs real side effects: the only
//! in-tree implementation logs and returns, and any real executor must be
//! injected through this trait by the host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    /// Raised by the host tripwire when real execution is attempted.
    #[error("real execution is not implemented in this tree: {0}")]
    RealExecutionForbidden(String),
}

/// Executes an action after an allow decision.
pub trait ActionExecutor {
    fn execute(&self, action: &str) -> Result<(), ExecError>;
}

/// Logging no-op executor; produces no external side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedExecutor;

impl ActionExecutor for SimulatedExecutor {
    fn execute(&self, action: &str) -> Result<(), ExecError> {
        tracing::info!(action, "simulated execution, no external side effects");
        Ok(())
    }
}
