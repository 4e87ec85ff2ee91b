use std::time::Duration;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In
/// production, override via environment variables (the host application
/// loads `.env` before constructing this, if it uses one).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (default: `http://localhost:3000`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`). A timed-out save
    /// surfaces as a retryable network error instead of hanging the UI.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `MARQUEE_API_URL`              | `http://localhost:3000` |
    /// | `MARQUEE_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MARQUEE_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let request_timeout_secs: u64 = std::env::var("MARQUEE_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("MARQUEE_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
