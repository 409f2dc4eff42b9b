//! Crate configuration.
//!
//! Loaded from `config.toml` under the platform config directory; a missing
//! file yields the defaults, which point at the production relay endpoint.

mod loader;

use serde::{Deserialize, Serialize};

pub use loader::ConfigError;

use crate::visibility::DEFAULT_THRESHOLD_RATIO;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relay: RelayConfig,
    pub animation: AnimationConfig,
}

/// Delivery settings for the contact form relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay endpoint that forwards submissions onward.
    pub endpoint: String,
    /// Direct address offered to the visitor when delivery fails.
    pub fallback_contact: String,
    /// Total time budget for one delivery attempt, in seconds.
    pub timeout_seconds: u64,
    /// Connection establishment budget, in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/mrelaakz".to_string(),
            fallback_contact: "ajaykushwahaa.aj@gmail.com".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

/// Settings for entrance-animation gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fraction of a section that must be on screen before it reveals.
    pub threshold_ratio: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
        }
    }
}
