pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use errors::{ApiError, CrptError, CrptValidationError};
pub use types::{CrptApi, CrptConfig, HttpTransport};
