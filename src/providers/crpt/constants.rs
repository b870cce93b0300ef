pub const CONTENT_TYPE_VALUE: &str = "application/json";
pub const ACCEPT_VALUE: &str = "*/*";
pub const CLIENT_TOKEN_HEADER: &str = "clientToken";
pub const USER_NAME_HEADER: &str = "userName";
pub const OMS_ID_QUERY_PARAM: &str = "omsId";

pub fn default_user_name() -> String {
    "user_name".to_string()
}

pub fn default_timeout_secs() -> u64 {
    10
}
