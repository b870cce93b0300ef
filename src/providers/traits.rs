// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::models::{Document, IntroduceResponse};
use crate::providers::errors::TransportError;

/// Carries a validated document to the remote API and decodes its answer.
///
/// The submission service never talks to the network directly; it hands the
/// document to a transport once a request slot has been reserved. This keeps
/// the admission and validation logic independent of the HTTP stack and lets
/// tests substitute an in-memory transport.
///
/// # Implementation Requirements
///
/// Implementors must:
/// - Serialize the document as JSON
/// - Attach the client token to the request
/// - Treat non-success responses and undecodable bodies as errors
/// - Not retry; a failed exchange is reported once
///
/// # Example Implementation
///
/// ```rust
/// # use async_trait::async_trait;
/// # use crpt_introduce::models::{Document, IntroduceResponse};
/// # use crpt_introduce::providers::{DocumentTransport, TransportError};
/// struct EchoTransport;
///
/// #[async_trait]
/// impl DocumentTransport for EchoTransport {
///     async fn send(
///         &self,
///         _document: &Document,
///         _client_token: &str,
///     ) -> Result<IntroduceResponse, TransportError> {
///         Ok(IntroduceResponse {
///             oms_id: "oms".into(),
///             report_id: "report".into(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait DocumentTransport: Send + Sync {
    /// Sends one document.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to submit
    /// * `client_token` - Credential passed in the `clientToken` header
    ///
    /// # Returns
    ///
    /// * `Ok(IntroduceResponse)` - The remote side accepted the document
    /// * `Err(TransportError)` - Encoding, transport, status or decode failure
    async fn send(
        &self,
        document: &Document,
        client_token: &str,
    ) -> Result<IntroduceResponse, TransportError>;
}
