//! Wait machinery: options, load states and the polling loop every
//! visibility and navigation wait goes through.

use crate::result::{VitrinaError, VitrinaResult};
use std::future::Future;
use std::time::{Duration, Instant};

/// Default timeout for wait operations (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Default timeout for navigation settles (30 seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Page load states a navigation can settle on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// The `load` event fired
    #[default]
    Load,
    /// The `DOMContentLoaded` event fired
    DomContentLoaded,
    /// No network requests for 500ms
    NetworkIdle,
}

impl LoadState {
    /// The event name the browser reports for this state.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::NetworkIdle => "networkidle",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

/// Options for polling waits
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create wait options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the polling interval in milliseconds.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// The timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The poll interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Options for navigation waits
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Load state the navigation must reach
    pub wait_until: LoadState,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_NAVIGATION_TIMEOUT_MS,
            wait_until: LoadState::NetworkIdle,
        }
    }
}

impl NavigationOptions {
    /// Create navigation options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the load state the navigation must reach.
    #[must_use]
    pub const fn with_wait_until(mut self, state: LoadState) -> Self {
        self.wait_until = state;
        self
    }
}

/// Poll an async probe until it reports `true` or the timeout elapses.
///
/// Returns the elapsed time on success. Probe errors propagate immediately;
/// expiry produces [`VitrinaError::Timeout`] naming `waiting_for`.
pub async fn poll_until<F, Fut>(
    mut probe: F,
    options: &WaitOptions,
    waiting_for: &str,
) -> VitrinaResult<Duration>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = VitrinaResult<bool>>,
{
    let start = Instant::now();
    let timeout = options.timeout();
    loop {
        if probe().await? {
            return Ok(start.elapsed());
        }
        if start.elapsed() >= timeout {
            return Err(VitrinaError::timeout(options.timeout_ms, waiting_for));
        }
        tokio::time::sleep(options.poll_interval()).await;
    }
}
