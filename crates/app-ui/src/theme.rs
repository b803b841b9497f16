//! Theme registry for Tally
//!
//! The app ships a single dark theme. It is built once from the static
//! tables in this module and never changes afterwards, so any component may
//! read it without synchronization.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::Theme;
//!
//! let theme = Theme::global();
//! let background = &theme.colors.background_dark;
//! let gutter = theme.spacing_y(20);
//! assert_eq!(gutter, Some(20.0));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::tokens;

static GLOBAL_THEME: OnceLock<Arc<Theme>> = OnceLock::new();

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Fully transparent
pub const TRANSPARENT: &str = "transparent";

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Some((r, g, b))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Tally brand colors
pub mod brand {
    /// Primary brand color (lime)
    pub const PRIMARY: &str = "#A3E635";
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
    /// Negative amounts and errors
    pub const ROSE: &str = "#EF4444";
    /// Positive amounts
    pub const GREEN: &str = "#16A34A";
}

// =============================================================================
// Neutral Scale
// =============================================================================

/// Neutral grays from lightest (50) to darkest (900)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralScale {
    /// 50
    pub n50: Color,
    /// 100
    pub n100: Color,
    /// 200
    pub n200: Color,
    /// 300
    pub n300: Color,
    /// 400
    pub n400: Color,
    /// 500
    pub n500: Color,
    /// 600
    pub n600: Color,
    /// 700
    pub n700: Color,
    /// 800
    pub n800: Color,
    /// 900
    pub n900: Color,
}

impl NeutralScale {
    /// Get a color by its numeric stop (50, 100, ..., 900)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            50 => Some(&self.n50),
            100 => Some(&self.n100),
            200 => Some(&self.n200),
            300 => Some(&self.n300),
            400 => Some(&self.n400),
            500 => Some(&self.n500),
            600 => Some(&self.n600),
            700 => Some(&self.n700),
            800 => Some(&self.n800),
            900 => Some(&self.n900),
            _ => None,
        }
    }
}

/// Named colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Brand color for buttons, links, spinners
    pub primary: Color,
    /// Screen background
    pub background_dark: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text
    pub text_light: Color,
    /// Tertiary text
    pub text_lighter: Color,
    /// White
    pub white: Color,
    /// Black
    pub black: Color,
    /// Negative accent
    pub rose: Color,
    /// Positive accent
    pub green: Color,
    /// Neutral grays
    pub neutral: NeutralScale,
}

impl ThemeColors {
    /// Shortcut for `neutral.get(stop)`
    pub fn neutral(&self, stop: u16) -> Option<&Color> {
        self.neutral.get(stop)
    }
}

// =============================================================================
// Step Scales
// =============================================================================

/// An indexed scale of design-space values (`step -> value`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepScale(BTreeMap<u16, f32>);

impl StepScale {
    /// Build a scale where each step's value equals its index
    pub fn identity(steps: &[u16]) -> Self {
        Self(steps.iter().map(|s| (*s, f32::from(*s))).collect())
    }

    /// Look up a step
    pub fn get(&self, step: u16) -> Option<f32> {
        self.0.get(&step).copied()
    }

    /// All steps, ascending
    pub fn steps(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.keys().copied()
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Named colors
    pub colors: ThemeColors,
    /// Vertical spacing steps
    pub spacing_y: StepScale,
    /// Horizontal spacing steps
    pub spacing_x: StepScale,
    /// Corner radius steps
    pub radius: StepScale,
}

impl Theme {
    /// Build the theme from the static tables
    pub fn standard() -> Self {
        let neutral = NeutralScale {
            n50: "#FAFAFA".to_string(),
            n100: "#F5F5F5".to_string(),
            n200: "#E5E5E5".to_string(),
            n300: "#D4D4D4".to_string(),
            n400: "#A3A3A3".to_string(),
            n500: "#737373".to_string(),
            n600: "#525252".to_string(),
            n700: "#404040".to_string(),
            n800: "#262626".to_string(),
            n900: "#171717".to_string(),
        };

        Theme {
            colors: ThemeColors {
                primary: brand::PRIMARY.to_string(),
                background_dark: neutral.n900.clone(),
                text: brand::WHITE.to_string(),
                text_light: neutral.n200.clone(),
                text_lighter: neutral.n300.clone(),
                white: brand::WHITE.to_string(),
                black: brand::BLACK.to_string(),
                rose: brand::ROSE.to_string(),
                green: brand::GREEN.to_string(),
                neutral,
            },
            spacing_y: StepScale::identity(&tokens::spacing_y::STEPS),
            spacing_x: StepScale::identity(&tokens::spacing_x::STEPS),
            radius: StepScale::identity(&tokens::radius::STEPS),
        }
    }

    /// The process-wide theme, initialized on first use
    pub fn global() -> Arc<Theme> {
        Arc::clone(GLOBAL_THEME.get_or_init(|| Arc::new(Theme::standard())))
    }

    /// Vertical spacing step (design space)
    pub fn spacing_y(&self, step: u16) -> Option<f32> {
        self.spacing_y.get(step)
    }

    /// Horizontal spacing step (design space)
    pub fn spacing_x(&self, step: u16) -> Option<f32> {
        self.spacing_x.get(step)
    }

    /// Corner radius step (design space)
    pub fn radius(&self, step: u16) -> Option<f32> {
        self.radius.get(step)
    }
}
