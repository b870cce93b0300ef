//! Rate limited client for the goods introduction document API.
//!
//! Documents are validated, admitted through an [`AdmissionGate`] that bounds
//! how many requests may be outstanding inside a time window, then posted to
//! the remote API.
//!
//! [`AdmissionGate`]: utility::rate_limiter::AdmissionGate

pub mod functions;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod settings;
pub mod utility;
pub mod validation;
