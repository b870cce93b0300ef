// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, Mutex, Notify};
use tracing::{debug, error, trace};

// Current module imports
use super::errors::GateError;
use super::traits::RateLimiter;
use super::types::{
    AdmissionGate, GateShared, GateState, PendingRelease, RateLimitConfig, TimeUnit,
};

impl TimeUnit {
    /// Converts `amount` of this unit into a duration, saturating on overflow.
    pub fn duration(&self, amount: u64) -> Duration {
        match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(amount),
            TimeUnit::Microseconds => Duration::from_micros(amount),
            TimeUnit::Milliseconds => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount.saturating_mul(60)),
            TimeUnit::Hours => Duration::from_secs(amount.saturating_mul(3_600)),
            TimeUnit::Days => Duration::from_secs(amount.saturating_mul(86_400)),
        }
    }
}

impl RateLimitConfig {
    /// Admission threshold, clamped to zero.
    pub fn limit(&self) -> usize {
        usize::try_from(self.request_limit.max(0)).unwrap_or(usize::MAX)
    }

    /// Release delay; a negative amount yields an empty window.
    pub fn window(&self) -> Duration {
        let amount: u64 = u64::try_from(self.window_amount.max(0)).unwrap_or_default();
        self.window_unit.duration(amount)
    }
}

impl AdmissionGate {
    /// Create a new gate with no slots held
    pub fn new(config: &RateLimitConfig) -> Self {
        let limit: usize = config.limit();
        let window: Duration = config.window();
        debug!(limit, window = ?window, "Admission gate created");

        Self {
            shared: Arc::new(GateShared {
                state: Mutex::new(GateState::default()),
                released: Notify::new(),
                limit,
                window,
            }),
        }
    }

    /// Suspends until a slot is free, reserves it and schedules its release.
    ///
    /// Dropping the returned future or firing `shutdown` while waiting leaves
    /// the counter untouched. A `shutdown` channel whose sender is dropped
    /// without sending is ignored from then on.
    pub async fn acquire(
        &self,
        mut shutdown: Option<broadcast::Receiver<()>>,
    ) -> Result<(), GateError> {
        loop {
            // Register for wake-ups before looking at the counter so a release
            // landing between the check and the wait is not lost.
            let released = self.shared.released.notified();
            tokio::pin!(released);
            released.as_mut().enable();

            if self.try_admit().await {
                self.schedule_release();
                return Ok(());
            }

            trace!(limit = self.shared.limit, "Gate saturated, waiting for a release");

            let signal = match shutdown.as_mut() {
                Some(shutdown_rx) => tokio::select! {
                    _ = released.as_mut() => None,
                    signal = shutdown_rx.recv() => Some(signal),
                },
                None => {
                    released.await;
                    None
                }
            };

            match signal {
                // Sender gone without signalling: keep waiting, unwatched.
                Some(Err(RecvError::Closed)) => shutdown = None,
                Some(_) => {
                    debug!("Shutdown signalled while waiting for a request slot");
                    return Err(GateError::Interrupted);
                }
                None => {}
            }
        }
    }

    /// Number of slots currently held.
    pub async fn active(&self) -> usize {
        self.shared.state.lock().await.active
    }

    pub fn limit(&self) -> usize {
        self.shared.limit
    }

    pub fn window(&self) -> Duration {
        self.shared.window
    }

    async fn try_admit(&self) -> bool {
        let mut state = self.shared.state.lock().await;
        if state.active <= self.shared.limit {
            state.active += 1;
            trace!(active = state.active, "Request slot reserved");
            true
        } else {
            false
        }
    }

    fn schedule_release(&self) {
        let shared: Arc<GateShared> = Arc::clone(&self.shared);
        // Built outside the task so it is dropped even if the task never runs.
        let mut pending = PendingRelease {
            window: shared.window,
            done: false,
        };
        tokio::spawn(async move {
            tokio::time::sleep(shared.window).await;
            shared.release().await;
            pending.done = true;
        });
    }
}

impl GateShared {
    async fn release(&self) {
        let mut state = self.state.lock().await;
        match state.active.checked_sub(1) {
            Some(active) => state.active = active,
            None => error!("Release fired with no slot held, counter left at zero"),
        }
        let active: usize = state.active;
        drop(state);

        self.released.notify_waiters();
        trace!(active, "Request slot released");
    }
}

impl Drop for PendingRelease {
    fn drop(&mut self) {
        if !self.done {
            error!(
                window = ?self.window,
                "Release task dropped before freeing its slot, the slot is leaked"
            );
        }
    }
}

#[async_trait]
impl RateLimiter for AdmissionGate {
    async fn acquire(&self, shutdown: Option<broadcast::Receiver<()>>) -> Result<(), GateError> {
        AdmissionGate::acquire(self, shutdown).await
    }

    async fn active(&self) -> usize {
        AdmissionGate::active(self).await
    }
}
