//! Responsive scaling
//!
//! Design values are authored against a reference screen. The engine maps
//! them onto the captured viewport:
//!
//! - vertical metrics (font sizes, heights, vertical spacing) scale with
//!   `device_height / reference_height`
//! - horizontal spacing scales with `short_side / reference_width`
//!
//! Every result is rounded half-up to a whole unit so nothing renders on a
//! sub-pixel boundary.

use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;
use crate::{ConfigurationError, Result};

/// Reference height the designs are drawn against
pub const REFERENCE_HEIGHT: f32 = 680.0;

/// Reference width the designs are drawn against
pub const REFERENCE_WIDTH: f32 = 375.0;

/// Round to the nearest integer, halves going up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Reference dimensions for the scale engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Design-time screen height
    pub reference_height: f32,
    /// Design-time screen width
    pub reference_width: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            reference_height: REFERENCE_HEIGHT,
            reference_width: REFERENCE_WIDTH,
        }
    }
}

/// Maps design-space values to device-space values
///
/// Built once from the startup viewport; cheap to copy into every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleEngine {
    viewport: Viewport,
    config: ScaleConfig,
}

impl ScaleEngine {
    /// Create an engine for a captured viewport
    ///
    /// Fails when the viewport has no usable height or width, or when the
    /// reference dimensions are not positive.
    pub fn new(viewport: Viewport, config: ScaleConfig) -> Result<Self> {
        if !is_positive(viewport.height) {
            return Err(ConfigurationError::DimensionsUnavailable(viewport.height));
        }
        if !is_positive(viewport.width) {
            return Err(ConfigurationError::InvalidWidth(viewport.width));
        }
        if !is_positive(config.reference_height) {
            return Err(ConfigurationError::InvalidReference {
                name: "height",
                value: config.reference_height,
            });
        }
        if !is_positive(config.reference_width) {
            return Err(ConfigurationError::InvalidReference {
                name: "width",
                value: config.reference_width,
            });
        }

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            platform = %viewport.platform,
            "Scale engine initialized"
        );

        Ok(Self { viewport, config })
    }

    /// The viewport this engine was built from
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Vertical scale factor (`device_height / reference_height`)
    pub fn factor(&self) -> f32 {
        self.viewport.height / self.config.reference_height
    }

    /// Scale a vertical design value
    pub fn scale(&self, value: f32) -> f32 {
        let scaled = f64::from(value) * f64::from(self.viewport.height)
            / f64::from(self.config.reference_height);
        round_half_up(scaled) as f32
    }

    /// Alias for [`ScaleEngine::scale`]
    pub fn vertical(&self, value: f32) -> f32 {
        self.scale(value)
    }

    /// Scale a horizontal design value
    pub fn horizontal(&self, value: f32) -> f32 {
        let scaled = f64::from(value) * f64::from(self.viewport.short_side())
            / f64::from(self.config.reference_width);
        round_half_up(scaled) as f32
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Platform;

    fn engine(height: f32) -> ScaleEngine {
        ScaleEngine::new(
            Viewport::new(390.0, height, Platform::Ios),
            ScaleConfig::default(),
        )
        .unwrap()
    }

    // ==========================================================================
    // Construction
    // ==========================================================================

    #[test]
    fn test_rejects_non_positive_height() {
        for height in [0.0, -1.0, -680.0, f32::NAN] {
            let result = ScaleEngine::new(
                Viewport::new(390.0, height, Platform::Android),
                ScaleConfig::default(),
            );
            assert!(matches!(
                result,
                Err(ConfigurationError::DimensionsUnavailable(_))
            ));
        }
    }

    #[test]
    fn test_accepts_any_positive_height() {
        for height in [0.5, 1.0, 680.0, 2400.0] {
            assert!(ScaleEngine::new(
                Viewport::new(390.0, height, Platform::Other),
                ScaleConfig::default()
            )
            .is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_width_and_reference() {
        let bad_width = ScaleEngine::new(
            Viewport::new(0.0, 800.0, Platform::Ios),
            ScaleConfig::default(),
        );
        assert_eq!(bad_width, Err(ConfigurationError::InvalidWidth(0.0)));

        let bad_reference = ScaleEngine::new(
            Viewport::new(390.0, 800.0, Platform::Ios),
            ScaleConfig {
                reference_height: 0.0,
                reference_width: REFERENCE_WIDTH,
            },
        );
        assert!(matches!(
            bad_reference,
            Err(ConfigurationError::InvalidReference { name: "height", .. })
        ));
    }

    // ==========================================================================
    // Scaling
    // ==========================================================================

    #[test]
    fn test_reference_height_is_identity() {
        let engine = engine(680.0);
        assert_eq!(engine.factor(), 1.0);
        assert_eq!(engine.scale(52.0), 52.0);
        assert_eq!(engine.scale(18.0), 18.0);
    }

    #[test]
    fn test_taller_device_scales_up() {
        // 52 * 850 / 680 = 65
        assert_eq!(engine(850.0).scale(52.0), 65.0);
    }

    #[test]
    fn test_matches_rounded_formula() {
        for height in [568.0_f32, 667.0, 736.0, 812.0, 926.0] {
            let engine = engine(height);
            for value in [0.0_f32, 5.0, 14.0, 17.0, 26.0, 300.0] {
                let expected =
                    (f64::from(value) * f64::from(height) / 680.0 + 0.5).floor() as f32;
                assert_eq!(engine.scale(value), expected, "v={value} h={height}");
            }
        }
    }

    #[test]
    fn test_monotonic_in_height() {
        for value in [1.0_f32, 18.0, 52.0, 100.0] {
            let mut previous = 0.0;
            for height in (100..2000).step_by(7) {
                let scaled = engine(height as f32).scale(value);
                assert!(scaled >= previous, "v={value} h={height}");
                previous = scaled;
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        // 34 * 340 / 680 = 17 exactly; 35 * 340 / 680 = 17.5 rounds up
        assert_eq!(engine(340.0).scale(35.0), 18.0);
    }

    #[test]
    fn test_horizontal_uses_short_side() {
        let engine = ScaleEngine::new(
            Viewport::new(750.0, 1600.0, Platform::Android),
            ScaleConfig::default(),
        )
        .unwrap();
        assert_eq!(engine.horizontal(15.0), 30.0);
        assert_eq!(engine.vertical(15.0), engine.scale(15.0));
    }
}
