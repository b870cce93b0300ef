pub mod crpt;
pub mod errors;
pub mod traits;

pub use errors::TransportError;
pub use traits::DocumentTransport;
