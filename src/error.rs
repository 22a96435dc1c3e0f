use thiserror::Error;

/// Errors raised by the engine's scheduling and bootstrap operations.
///
/// Task level failures never surface here, they are folded into
/// [`crate::engine::ExecutionResult`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("queue {0} not found")]
    QueueNotFound(u64),

    #[error("invalid cron expression '{expression}' for queue {queue}: {reason}")]
    InvalidCron {
        queue: String,
        expression: String,
        reason: String,
    },

    #[error("store error: {0}")]
    Store(String),

    #[error("trigger error: {0}")]
    Trigger(String),
}
