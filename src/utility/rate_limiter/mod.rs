//! Admission gate
//!
//! Bounds how many requests may be outstanding inside a sliding window.
//! Each admission reserves one slot and schedules its own release once the
//! window elapses; callers arriving while the gate is saturated are suspended
//! until a release wakes them.
//!
//! The admission check is `active <= limit`, so a gate configured with a
//! limit of `N` lets up to `N + 1` admissions hold a slot at once.
//!
//! # Example
//!
//! ```rust,no_run
//! use crpt_introduce::utility::rate_limiter::{AdmissionGate, RateLimitConfig, TimeUnit};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gate = AdmissionGate::new(&RateLimitConfig {
//!     request_limit: 10,
//!     window_amount: 1,
//!     window_unit: TimeUnit::Seconds,
//! });
//!
//! gate.acquire(None).await?;
//! // Issue the request; the slot frees itself one second later.
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::GateError;
pub use traits::RateLimiter;
pub use types::{AdmissionGate, RateLimitConfig, TimeUnit};
