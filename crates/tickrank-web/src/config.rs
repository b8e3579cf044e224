use thiserror::Error;

/// Environment variable holding the Finnhub API token.
pub const TOKEN_VAR: &str = "FINNHUB_TOKEN";

/// Startup configuration errors; all of them are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FINNHUB_TOKEN is missing; set it in the environment or a .env file")]
    MissingToken,
}

/// Service configuration resolved once at startup and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub finnhub_token: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when `FINNHUB_TOKEN` is
    /// unset or blank; the service refuses to start without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let finnhub_token = std::env::var(TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self { finnhub_token })
    }
}
