/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "CRPT_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `CRPT__API__OMS_ID`
pub const ENV_PREFIX: &str = "CRPT";

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Document API
[api]
base_url = "https://ismp.crpt.ru/api/v2/pharma/rollout"
oms_id = "your_oms_id"
user_name = "user_name"
# Seconds to wait for a single request
timeout_secs = 10
# Optional: token used when submitting from the command line
# client_token = "your_client_token"

# Admission gate: at most request_limit + 1 requests per window
[rate_limit]
request_limit = 10
window_amount = 1
# One of nanoseconds, microseconds, milliseconds, seconds, minutes, hours, days
window_unit = "seconds"
"#;
