//! Document validation.
//!
//! A document is accepted only when every field rule holds: known enumerated
//! tags, well-formed INNs, dates inside the accepted window, well-formed
//! products and the section matching the document type.

pub mod constants;
pub mod impls;
pub mod traits;
pub mod types;

pub use traits::DocumentValidator;
pub use types::Validator;
