pub mod document;
pub mod enums;
pub mod response;

pub use document::{Document, Import, Produced, Product};
pub use enums::{CertificateDocument, DocumentFormat, DocumentType, ProductionType, UsageType};
pub use response::IntroduceResponse;
