pub fn default_request_limit() -> i64 {
    10
}

pub fn default_window_amount() -> i64 {
    1
}

pub fn default_window_unit() -> super::types::TimeUnit {
    super::types::TimeUnit::Seconds
}
