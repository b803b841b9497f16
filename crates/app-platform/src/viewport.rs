//! Device viewport capture
//!
//! The viewport is read once when the process starts. Devices are treated
//! as fixed-orientation for the app's lifetime, so nothing here reacts to
//! resize events.

use serde::{Deserialize, Serialize};

/// Top inset used on platforms without a proportional safe area
pub const FALLBACK_TOP_INSET: f32 = 50.0;

/// Fraction of the viewport height reserved at the top on iOS
pub const IOS_TOP_INSET_RATIO: f32 = 0.06;

/// Host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS (notched devices, proportional inset)
    Ios,
    /// Android
    Android,
    /// Anything else (web, desktop shells)
    #[default]
    Other,
}

impl Platform {
    /// Platform identifier as reported by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "other" | "web" => Ok(Platform::Other),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// Window dimensions captured at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Window width in device-independent units
    pub width: f32,
    /// Window height in device-independent units
    pub height: f32,
    /// Host platform
    #[serde(default)]
    pub platform: Platform,
}

impl Viewport {
    /// Capture a viewport
    ///
    /// No validation happens here; [`crate::ScaleEngine::new`] rejects
    /// unusable dimensions.
    pub fn new(width: f32, height: f32, platform: Platform) -> Self {
        Self {
            width,
            height,
            platform,
        }
    }

    /// Shorter side of the window
    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Longer side of the window
    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Top padding keeping content clear of the status bar and notch
    pub fn top_inset(&self) -> f32 {
        match self.platform {
            Platform::Ios => self.height * IOS_TOP_INSET_RATIO,
            Platform::Android | Platform::Other => FALLBACK_TOP_INSET,
        }
    }
}
