// 3rd party crates
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the remote side for an accepted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroduceResponse {
    pub oms_id: String,
    pub report_id: String,
}
