use std::time::Duration;

use crate::http_client::reqwest_http_client::DEFAULT_TIMEOUT;

pub const ENVIRONMENT_VAR: &str = "HTTP_INSTANT_ENV";
pub const DEBUG_VAR: &str = "HTTP_INSTANT_DEBUG";
pub const TIMEOUT_MS_VAR: &str = "HTTP_INSTANT_TIMEOUT_MS";

const PRODUCTION: &str = "production";

/// Executor settings, fixed for the lifetime of a `RequestExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Overall transport timeout.
    pub timeout: Duration,
    /// Emit the request/response trace to the configured sink.
    pub debug: bool,
    /// Return the canned response instead of touching the network.
    pub mock_mode: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            mock_mode: false,
        }
    }
}

impl ExecutorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Mock mode is on for any non-empty environment other than `production`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(environment) = lookup(ENVIRONMENT_VAR) {
            let environment = environment.trim();
            config.mock_mode =
                !environment.is_empty() && !environment.eq_ignore_ascii_case(PRODUCTION);
        }

        if let Some(debug) = lookup(DEBUG_VAR) {
            config.debug = matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(timeout) = lookup(TIMEOUT_MS_VAR).and_then(|ms| ms.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_millis(timeout);
        }

        config
    }
}
