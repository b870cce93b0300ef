// Project imports
use crate::models::Document;

/// Pluggable acceptance predicate applied before a document is submitted.
pub trait DocumentValidator: Send + Sync {
    /// Returns `true` when the document may be sent.
    fn is_valid(&self, document: &Document) -> bool;
}
