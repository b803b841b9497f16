//! Design tokens for Tally
//!
//! Every value here is design-space: authored against the reference screen
//! and scaled at render time through [`crate::UiContext`].

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Vertical spacing steps (scaled with the viewport height)
pub mod spacing_y {
    /// Available steps, ascending
    pub const STEPS: [u16; 13] = [5, 7, 10, 12, 15, 17, 20, 25, 30, 35, 40, 50, 60];

    /// 7px - gap under the status bar
    pub const S7: u16 = 7;
    /// 20px - default gutter
    pub const S20: u16 = 20;
    /// 30px - section gap
    pub const S30: u16 = 30;
}

/// Horizontal spacing steps (scaled with the viewport's short side)
pub mod spacing_x {
    /// Available steps, ascending
    pub const STEPS: [u16; 11] = [3, 5, 7, 10, 12, 15, 20, 25, 30, 35, 40];

    /// 10px - icon/text gap
    pub const S10: u16 = 10;
    /// 15px - input padding
    pub const S15: u16 = 15;
    /// 25px - footer side padding
    pub const S25: u16 = 25;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Corner radius steps (scaled with the viewport height)
pub mod radius {
    /// Available steps, ascending
    pub const STEPS: [u16; 8] = [3, 6, 10, 12, 15, 17, 20, 30];

    /// 12px - icon buttons
    pub const R12: u16 = 12;
    /// 17px - buttons and inputs
    pub const R17: u16 = 17;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Button height (52px)
    pub const BUTTON_HEIGHT: f32 = 52.0;
    /// Input height (54px)
    pub const INPUT_HEIGHT: f32 = 54.0;
    /// Input border width (1px)
    pub const INPUT_BORDER: f32 = 1.0;

    /// Icon sizes
    pub mod icon {
        /// Trailing input icon (24px)
        pub const TRAILING: f32 = 24.0;
        /// Leading input icon and back button default (26px)
        pub const LEADING: f32 = 26.0;
        /// Back button on auth screens (28px)
        pub const BACK: f32 = 28.0;
    }

    /// Back button padding (5px)
    pub const BACK_BUTTON_PADDING: f32 = 5.0;
    /// Welcome hero image height (300px)
    pub const HERO_HEIGHT: f32 = 300.0;
    /// Welcome hero image top margin (100px)
    pub const HERO_MARGIN_TOP: f32 = 100.0;
    /// Splash logo height as a share of the screen
    pub const SPLASH_LOGO_PERCENT: f32 = 20.0;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Instant (0ms)
    pub const INSTANT: u32 = 0;
    /// Entrance fade (1000ms)
    pub const ENTRANCE: u32 = 1000;
    /// Stagger between consecutive entrance blocks (100ms)
    pub const STAGGER: u32 = 100;
    /// Splash screen hold before auto-advancing (2000ms)
    pub const SPLASH_HOLD: u64 = 2000;
}

/// Spring parameters
pub mod spring {
    /// Damping for entrance springs
    pub const DAMPING: f32 = 12.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Heavy/Black (800)
    pub const HEAVY: u16 = 800;
}
