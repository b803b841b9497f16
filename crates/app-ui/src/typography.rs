//! Typography scale for Tally
//!
//! Font sizes are design-space values; the text surface scales them
//! vertically at render time.

use serde::{Deserialize, Serialize};

/// Font size scale in design pixels
pub mod font_size {
    /// Body text when no size is given (18px)
    pub const DEFAULT: f32 = 18.0;
    /// Small print (14px)
    pub const SM: f32 = 14.0;
    /// Footer links (15px)
    pub const FOOTER: f32 = 15.0;
    /// Form captions (16px)
    pub const CAPTION: f32 = 16.0;
    /// Subtitles (17px)
    pub const SUBTITLE: f32 = 17.0;
    /// Login button label (21px)
    pub const BUTTON: f32 = 21.0;
    /// Primary call-to-action label (22px)
    pub const CTA: f32 = 22.0;
    /// Headlines (30px)
    pub const DISPLAY: f32 = 30.0;
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Natural alignment (default)
    #[default]
    Auto,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}
