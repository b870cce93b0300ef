// 3rd party crates
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Interrupted while waiting for a free request slot")]
    Interrupted,
}
