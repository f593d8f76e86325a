//! Suite configuration.
//!
//! Scenario runs read the application endpoints and back-office credentials
//! from the environment; everything has a deterministic default so mock-only
//! runs need no setup.

use crate::result::{VitrinaError, VitrinaResult};
use serde::Deserialize;

/// Environment variable naming the back-office base URL.
pub const ENV_BO_URL: &str = "VITRINA_BO_URL";
/// Environment variable naming the front-office base URL.
pub const ENV_FO_URL: &str = "VITRINA_FO_URL";
/// Environment variable naming the back-office login email.
pub const ENV_BO_EMAIL: &str = "VITRINA_BO_EMAIL";
/// Environment variable naming the back-office login password.
pub const ENV_BO_PASSWORD: &str = "VITRINA_BO_PASSWORD";
/// Environment variable toggling headless mode (`0`/`false` for headful).
pub const ENV_HEADLESS: &str = "VITRINA_HEADLESS";

/// Configuration for one suite run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Back-office base URL
    pub bo_base_url: String,
    /// Front-office base URL
    pub fo_base_url: String,
    /// Back-office login email
    pub bo_email: String,
    /// Back-office login password
    pub bo_password: String,
    /// Run the browser headless
    pub headless: bool,
    /// Default wait timeout in milliseconds
    pub wait_timeout_ms: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            bo_base_url: "http://localhost:8080/admin-dev".to_string(),
            fo_base_url: "http://localhost:8080".to_string(),
            bo_email: "demo@demo.com".to_string(),
            bo_password: "demodemo".to_string(),
            headless: true,
            wait_timeout_ms: crate::wait::DEFAULT_WAIT_TIMEOUT_MS,
        }
    }
}

impl SuiteConfig {
    /// Defaults overridden by any `VITRINA_*` variables present in the
    /// environment.
    pub fn from_env() -> VitrinaResult<Self> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_BO_URL) {
            config.bo_base_url = url;
        }
        if let Ok(url) = std::env::var(ENV_FO_URL) {
            config.fo_base_url = url;
        }
        if let Ok(email) = std::env::var(ENV_BO_EMAIL) {
            config.bo_email = email;
        }
        if let Ok(password) = std::env::var(ENV_BO_PASSWORD) {
            config.bo_password = password;
        }
        if let Ok(raw) = std::env::var(ENV_HEADLESS) {
            config.headless = match raw.trim() {
                "0" | "false" | "no" => false,
                "1" | "true" | "yes" => true,
                other => {
                    return Err(VitrinaError::Config {
                        message: format!("{ENV_HEADLESS}={other} is not a boolean"),
                    })
                }
            };
        }
        Ok(config)
    }

    /// Set the back-office base URL.
    #[must_use]
    pub fn with_bo_base_url(mut self, url: impl Into<String>) -> Self {
        self.bo_base_url = url.into();
        self
    }

    /// Set the front-office base URL.
    #[must_use]
    pub fn with_fo_base_url(mut self, url: impl Into<String>) -> Self {
        self.fo_base_url = url.into();
        self
    }

    /// Set the back-office credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.bo_email = email.into();
        self.bo_password = password.into();
        self
    }

    /// A back-office URL under the configured base.
    #[must_use]
    pub fn bo_url(&self, path: &str) -> String {
        join_url(&self.bo_base_url, path)
    }

    /// A front-office URL under the configured base.
    #[must_use]
    pub fn fo_url(&self, path: &str) -> String {
        join_url(&self.fo_base_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}
