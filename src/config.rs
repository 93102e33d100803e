//! Runtime settings.

use std::time::Duration;

/// Settings for the gateway and the upstream client.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Total per-request timeout for upstream calls, in seconds. Bounds
    /// every step of the resolution pipeline.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
