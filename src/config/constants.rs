use std::time::Duration;

pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DATA_DIR: &str = "./data";

pub const CONFIG_DIR_NAME: &str = "roleboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DASHBOARD_HEADLINE: &str = "그래서, 데이터 엔지니어가 뭔데?";
pub const DASHBOARD_SUBHEADLINE: &str = "데이터 엔지니어? 저희가 알려드릴게요! 직접 데이터로 확인해볼까요?";

/// Label used when a code has no entry in the category label map.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Work-task code meaning "no response".
pub const NO_RESPONSE_CODE: i64 = 0;

pub const TECH_STACK_LIMIT: usize = 10;

pub const DEFAULT_GRADIENT_START: &str = "rgba(79, 70, 229, 1)";
pub const DEFAULT_GRADIENT_END: &str = "rgba(165, 180, 252, 0.6)";
pub const DEFAULT_BAR_THICKNESS: u32 = 24;
pub const DEFAULT_BORDER_RADIUS: u32 = 8;

pub const SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
