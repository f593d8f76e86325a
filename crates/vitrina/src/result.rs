//! Result and error types for Vitrina.

use thiserror::Error;

/// Result type for Vitrina operations
pub type VitrinaResult<T> = Result<T, VitrinaError>;

/// Errors that can occur while driving the browser
#[derive(Debug, Error)]
pub enum VitrinaError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level driver error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// A wait condition never became true
    #[error("Timed out after {ms}ms waiting for {waiting_for}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of the awaited condition
        waiting_for: String,
    },

    /// A required selector matched nothing when extraction was attempted
    #[error("No element matched selector '{selector}'")]
    ElementNotFound {
        /// The selector that matched nothing
        selector: String,
    },

    /// Element matched but could not be filled or selected
    #[error("Element '{selector}' is not interactable: {message}")]
    NotInteractable {
        /// The selector that matched
        selector: String,
        /// Error message
        message: String,
    },

    /// Text extraction produced something unparseable
    #[error("Could not parse a number out of '{text}'")]
    NumberParse {
        /// The extracted text
        text: String,
    },

    /// Suite configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VitrinaError {
    /// Construct a timeout error for an awaited condition.
    #[must_use]
    pub fn timeout(ms: u64, waiting_for: impl Into<String>) -> Self {
        Self::Timeout {
            ms,
            waiting_for: waiting_for.into(),
        }
    }

    /// Construct an element-not-found error for a selector.
    #[must_use]
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// True if this error is a wait-condition timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_names_the_condition() {
        let err = VitrinaError::timeout(2000, "selector '#employee_grid' visible");
        let msg = err.to_string();
        assert!(msg.contains("2000ms"));
        assert!(msg.contains("#employee_grid"));
    }

    #[test]
    fn test_element_not_found_display() {
        let err = VitrinaError::element_not_found("div.alert");
        assert!(err.to_string().contains("div.alert"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(VitrinaError::timeout(1, "x").is_timeout());
        assert!(!VitrinaError::element_not_found("x").is_timeout());
    }
}
