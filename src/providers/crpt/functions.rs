// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, error};

// Project imports
use crate::models::{Document, IntroduceResponse};
use crate::providers::TransportError;

// Current module imports
use super::constants::{
    ACCEPT_VALUE, CLIENT_TOKEN_HEADER, CONTENT_TYPE_VALUE, OMS_ID_QUERY_PARAM, USER_NAME_HEADER,
};
use super::errors::CrptError;
use super::types::{CrptConfig, HttpTransport};

/// Creates a reqwest client carrying the headers shared by every request.
pub(super) fn create_reqwest_client(config: &CrptConfig) -> Result<Client, CrptError> {
    let mut headers: HeaderMap = HeaderMap::new();

    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

    let user_name: HeaderValue = HeaderValue::from_str(&config.user_name).map_err(|e| {
        error!(user_name = %config.user_name, "Invalid user name header: {}", e);
        CrptError::InvalidHeaderValue(e)
    })?;
    headers.insert(USER_NAME_HEADER, user_name);

    let client: Client = Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            CrptError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Posts a document and decodes the acknowledgement.
pub(super) async fn send_document(
    transport: &HttpTransport,
    document: &Document,
    client_token: &str,
) -> Result<IntroduceResponse, TransportError> {
    let body: String = serde_json::to_string(document).map_err(TransportError::Encode)?;

    // Mark security-sensitive headers with `set_sensitive`.
    let mut token_value: HeaderValue = HeaderValue::from_str(client_token)?;
    token_value.set_sensitive(true);

    debug!(
        url = %transport.config.base_url,
        oms_id = %transport.config.oms_id,
        "Sending document"
    );

    let timeout_secs: u64 = transport.config.timeout_secs;
    let response = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        transport
            .client
            .post(&transport.config.base_url)
            .query(&[(OMS_ID_QUERY_PARAM, transport.config.oms_id.as_str())])
            .header(header::CONTENT_TYPE, CONTENT_TYPE_VALUE)
            .header(CLIENT_TOKEN_HEADER, token_value)
            .body(body)
            .send(),
    )
    .await
    .map_err(|_| TransportError::Timeout(timeout_secs))??;

    let status = response.status();
    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(TransportError::Status {
            status,
            body: error_body,
        });
    }

    let response_text: String = response.text().await?;
    debug!(response = %response_text, "Received introduce response");

    serde_json::from_str(&response_text).map_err(|e| TransportError::Decode {
        message: format!("{} - Raw: {}", e, response_text),
    })
}
