//! Client and hook configuration
//!
//! Configuration is built once and handed to the client and hooks at
//! construction time. Nothing here is mutated after startup.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout in milliseconds (30 seconds)
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default user agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("npa-hooks/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the tenant base URL
pub const ENV_BASE_URL: &str = "NPA_BASE_URL";
/// Environment variable overriding the request timeout (milliseconds)
pub const ENV_TIMEOUT_MS: &str = "NPA_TIMEOUT_MS";
/// Environment variable enabling verbose hook diagnostics
pub const ENV_HOOK_DEBUG: &str = "NPA_HOOK_DEBUG";

/// Settings read by the built-in hooks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookConfig {
    /// Log message bodies and every transformation decision at debug level
    pub debug: bool,
}

impl HookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Configuration for [`ApiClient`](crate::client::ApiClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the tenant, e.g. `https://tenant.goskope.com/api/v2`
    pub base_url: String,
    /// Request timeout enforced by the transport
    pub timeout: Duration,
    /// User agent header value
    pub user_agent: String,
    /// Settings forwarded to the default hooks
    pub hooks: HookConfig,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            hooks: HookConfig::default(),
        }
    }

    /// Load configuration from `NPA_BASE_URL`, `NPA_TIMEOUT_MS` and `NPA_HOOK_DEBUG`
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_BASE_URL)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_BASE_URL.to_string()))?;

        let mut config = Self::new(base_url);

        if let Ok(raw) = env::var(ENV_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_MS.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        if let Ok(raw) = env::var(ENV_HOOK_DEBUG) {
            config.hooks.debug = parse_flag(ENV_HOOK_DEBUG, &raw)?;
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_hooks(mut self, hooks: HookConfig) -> Self {
        self.hooks = hooks;
        self
    }
}

/// Parse a boolean flag the way shells usually spell them
fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
