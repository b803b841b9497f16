//! Platform and display metrics for Tally
//!
//! This crate captures the device viewport once at startup and turns
//! design-space dimensions into device-space dimensions.
//!
//! # Modules
//!
//! - [`viewport`] - Viewport capture, platform detection, safe-area insets
//! - [`scale`] - Responsive scaling of design-time values
//!
//! # Example
//!
//! ```rust
//! use app_platform::{Platform, ScaleConfig, ScaleEngine, Viewport};
//!
//! let viewport = Viewport::new(390.0, 850.0, Platform::Ios);
//! let engine = ScaleEngine::new(viewport, ScaleConfig::default()).unwrap();
//! assert_eq!(engine.scale(52.0), 65.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scale;
pub mod viewport;

pub use scale::{round_half_up, ScaleConfig, ScaleEngine};
pub use viewport::{Platform, Viewport};

/// Errors raised while capturing display metrics
///
/// Every variant is startup-fatal: the app refuses to render without a
/// usable viewport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Viewport height is zero, negative or not a number
    #[error("Dimensions unavailable: viewport height {0} is not positive")]
    DimensionsUnavailable(f32),

    /// Viewport width is zero, negative or not a number
    #[error("Invalid viewport width: {0}")]
    InvalidWidth(f32),

    /// A reference (design-time) dimension is not positive
    #[error("Invalid reference {name}: {value}")]
    InvalidReference {
        /// Which reference dimension
        name: &'static str,
        /// The offending value
        value: f32,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
