// 3rd party crates
use async_trait::async_trait;
use tokio::sync::broadcast;

// Current module imports
use super::errors::GateError;

/// Rate limiter trait for implementing different admission strategies
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Wait until a request slot is free and reserve it.
    ///
    /// A fired `shutdown` channel abandons the wait with
    /// [`GateError::Interrupted`] without reserving anything.
    async fn acquire(&self, shutdown: Option<broadcast::Receiver<()>>) -> Result<(), GateError>;

    /// Number of slots currently held.
    async fn active(&self) -> usize;
}
