//! Application configuration
//!
//! Every field has a default, so an empty JSON object is a valid document.

use app_platform::ScaleConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Design-time screen height
    pub reference_height: f32,
    /// Design-time screen width
    pub reference_width: f32,
    /// Splash hold before moving on, in milliseconds
    pub splash_delay_ms: u64,
    /// Default log filter (`RUST_LOG` wins when set)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let scale = ScaleConfig::default();
        Self {
            reference_height: scale.reference_height,
            reference_width: scale.reference_width,
            splash_delay_ms: app_ui::duration::SPLASH_HOLD,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reference dimensions for the scale engine
    pub fn scale_config(&self) -> ScaleConfig {
        ScaleConfig {
            reference_height: self.reference_height,
            reference_width: self.reference_width,
        }
    }

    /// Splash hold
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}
