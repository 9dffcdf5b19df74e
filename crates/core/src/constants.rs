//! Shared constants for productivity-coach.

/// Status string returned by the health endpoint.
pub const HEALTH_STATUS: &str = "AI Productivity Coach Backend Running";

/// Error message for an absent or empty usage list.
pub const NO_DATA_MESSAGE: &str = "No data provided";

/// Chat-completion model used when `COACH_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Completion service root used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Outbound request timeout in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "COACH_MODEL";
pub const ENV_LLM_TIMEOUT_SECS: &str = "COACH_LLM_TIMEOUT_SECS";
