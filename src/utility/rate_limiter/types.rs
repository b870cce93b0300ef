// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use serde::Deserialize;
use tokio::sync::{Mutex, Notify};

// Current module imports
use super::constants::{default_request_limit, default_window_amount, default_window_unit};

/// Unit the window amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// Rate limiting configuration for the document API
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Admission threshold; negative values are treated as zero
    #[serde(default = "default_request_limit")]
    pub request_limit: i64,
    /// Window length in `window_unit`; negative values give an empty window
    #[serde(default = "default_window_amount")]
    pub window_amount: i64,
    #[serde(default = "default_window_unit")]
    pub window_unit: TimeUnit,
}

/// Counter of slots currently held.
#[derive(Debug, Default)]
pub struct GateState {
    pub active: usize,
}

#[derive(Debug)]
pub(crate) struct GateShared {
    pub(crate) state: Mutex<GateState>,
    pub(crate) released: Notify,
    pub(crate) limit: usize,
    pub(crate) window: Duration,
}

/// Release scheduled for one admitted slot.
///
/// Dropped with `done` unset means the slot stays held for good.
#[derive(Debug)]
pub(crate) struct PendingRelease {
    pub(crate) window: Duration,
    pub(crate) done: bool,
}

/// Admission gate with delayed per-slot release.
///
/// Cloning is cheap and every clone shares the same counter.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    pub(crate) shared: Arc<GateShared>,
}
