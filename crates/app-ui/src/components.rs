//! UI primitive library for Tally
//!
//! Components are plain Rust values describing props. Rendering is a pure
//! function of those props and a [`UiContext`] (scale engine, theme,
//! animation guard) producing a serializable view the host draws.
//!
//! Interactive components do not take closures. They carry a caller-chosen
//! action value (`A`) and hand it back when the interaction completes, so
//! the caller decides what a press means.
//!
//! # Available Components
//!
//! - [`Text`] - Scaled, theme-colored text
//! - [`Button`] - Pressable container with a loading state
//! - [`Spinner`] - Centered indeterminate progress indicator
//! - [`ScreenContainer`] - Full-bleed screen root with a top inset
//! - [`Input`] - Text field with icon slots and optional masking
//! - [`BackButton`] - Icon button that requests back navigation
//! - [`Link`] - Pressable text
//! - [`Image`] - Static image

use app_platform::{ScaleEngine, Viewport};
use app_state::AnimationGuard;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::theme::{Color, Theme, TRANSPARENT};
use crate::tokens::{font_weight, radius, sizing, spacing_x};
use crate::typography::{font_size, TextAlign};

// =============================================================================
// Render Context
// =============================================================================

/// Everything a component needs to render
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Responsive scaling for the captured viewport
    pub scale: ScaleEngine,
    /// Theme registry
    pub theme: Arc<Theme>,
    /// Entrance animation guard
    pub guard: Arc<AnimationGuard>,
}

impl UiContext {
    /// Create a context from explicit parts
    pub fn new(scale: ScaleEngine, theme: Arc<Theme>, guard: Arc<AnimationGuard>) -> Self {
        Self {
            scale,
            theme,
            guard,
        }
    }

    /// Create a context backed by the process-wide theme and guard
    pub fn with_globals(scale: ScaleEngine) -> Self {
        Self::new(scale, Theme::global(), AnimationGuard::global())
    }

    /// The captured viewport
    pub fn viewport(&self) -> &Viewport {
        self.scale.viewport()
    }

    /// Scale a vertical design value
    pub fn vs(&self, value: f32) -> f32 {
        self.scale.vertical(value)
    }

    /// Scale a horizontal design value
    pub fn hs(&self, value: f32) -> f32 {
        self.scale.horizontal(value)
    }

    /// Scaled vertical spacing step
    pub fn space_y(&self, step: u16) -> f32 {
        match self.theme.spacing_y(step) {
            Some(value) => self.vs(value),
            None => {
                tracing::warn!(step, "Unknown vertical spacing step");
                0.0
            }
        }
    }

    /// Scaled horizontal spacing step
    pub fn space_x(&self, step: u16) -> f32 {
        match self.theme.spacing_x(step) {
            Some(value) => self.hs(value),
            None => {
                tracing::warn!(step, "Unknown horizontal spacing step");
                0.0
            }
        }
    }

    /// Scaled corner radius step
    pub fn radius(&self, step: u16) -> f32 {
        match self.theme.radius(step) {
            Some(value) => self.vs(value),
            None => {
                tracing::warn!(step, "Unknown radius step");
                0.0
            }
        }
    }
}

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = &'static str;

/// Style properties that can be applied to any component
///
/// Unset fields mean "inherit / default". See [`StyleProps::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Extra top padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Aspect ratio (width / height)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
    /// Flex factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Main axis direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Main axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Cross axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Cross axis alignment of this component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Corner curve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_curve: Option<BorderCurve>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight (100 - 900)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Text alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl StyleProps {
    /// Layer `overrides` on top of `self`
    ///
    /// Every field set in `overrides` wins; unset fields keep the value from
    /// `self`.
    pub fn merge(&self, overrides: &StyleProps) -> StyleProps {
        fn pick<T: Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }

        StyleProps {
            margin: pick(&self.margin, &overrides.margin),
            padding: pick(&self.padding, &overrides.padding),
            padding_top: pick(&self.padding_top, &overrides.padding_top),
            width: pick(&self.width, &overrides.width),
            height: pick(&self.height, &overrides.height),
            aspect_ratio: pick(&self.aspect_ratio, &overrides.aspect_ratio),
            flex: pick(&self.flex, &overrides.flex),
            flex_direction: pick(&self.flex_direction, &overrides.flex_direction),
            justify_content: pick(&self.justify_content, &overrides.justify_content),
            align_items: pick(&self.align_items, &overrides.align_items),
            align_self: pick(&self.align_self, &overrides.align_self),
            gap: pick(&self.gap, &overrides.gap),
            background_color: pick(&self.background_color, &overrides.background_color),
            border_radius: pick(&self.border_radius, &overrides.border_radius),
            border_curve: pick(&self.border_curve, &overrides.border_curve),
            border_width: pick(&self.border_width, &overrides.border_width),
            border_color: pick(&self.border_color, &overrides.border_color),
            opacity: pick(&self.opacity, &overrides.opacity),
            color: pick(&self.color, &overrides.color),
            font_size: pick(&self.font_size, &overrides.font_size),
            font_weight: pick(&self.font_weight, &overrides.font_weight),
            text_align: pick(&self.text_align, &overrides.text_align),
        }
    }

    /// Center children on both axes
    pub fn centered() -> Self {
        StyleProps {
            justify_content: Some(JustifyContent::Center),
            align_items: Some(Alignment::Center),
            ..Default::default()
        }
    }
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Spacing {
    /// Horizontal-only spacing
    pub fn horizontal(value: f32) -> Self {
        Spacing::Symmetric {
            vertical: 0.0,
            horizontal: value,
        }
    }
}

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed value in device units
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    FlexStart,
    /// Center
    Center,
    /// End
    FlexEnd,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Column (vertical, default on mobile)
    #[default]
    Column,
    /// Row (horizontal)
    Row,
}

/// Corner curve shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderCurve {
    /// Circular arcs
    #[default]
    Circular,
    /// Continuous (squircle) curve
    Continuous,
}

/// Content style requested for the system status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Platform default
    #[default]
    Default,
    /// Light icons/text, for dark backgrounds
    LightContent,
    /// Dark icons/text, for light backgrounds
    DarkContent,
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Design-space font size (defaults to 18)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Color override (defaults to the theme text color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Weight override (defaults to 400)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Number of lines (0 = unlimited)
    #[serde(default)]
    pub lines: u32,
    /// Caller styles, applied after the computed ones
    #[serde(default)]
    pub style: StyleProps,
}

/// Rendered text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextView {
    /// Text content
    pub content: String,
    /// Number of lines (0 = unlimited)
    pub lines: u32,
    /// Final style
    pub style: StyleProps,
}

impl Text {
    /// Create new text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: None,
            color: None,
            font_weight: None,
            lines: 0,
            style: StyleProps::default(),
        }
    }

    /// Set the design-space font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set text color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set font weight
    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Set maximum lines
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }

    /// Set caller styles
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> TextView {
        let computed = StyleProps {
            font_size: Some(ctx.vs(self.size.unwrap_or(font_size::DEFAULT))),
            color: Some(
                self.color
                    .clone()
                    .unwrap_or_else(|| ctx.theme.colors.text.clone()),
            ),
            font_weight: Some(self.font_weight.unwrap_or(font_weight::NORMAL)),
            ..Default::default()
        };

        TextView {
            content: self.content.clone(),
            lines: self.lines,
            style: computed.merge(&self.style),
        }
    }
}

// =============================================================================
// Spinner Component
// =============================================================================

/// Spinner size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerSize {
    /// Small (20px)
    Small,
    /// Large (36px)
    #[default]
    Large,
}

impl SpinnerSize {
    /// Diameter in device units
    pub fn pixels(&self) -> f32 {
        match self {
            SpinnerSize::Small => 20.0,
            SpinnerSize::Large => 36.0,
        }
    }
}

/// Indeterminate progress indicator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spinner {
    /// Size of the spinner
    #[serde(default)]
    pub size: SpinnerSize,
    /// Color override (defaults to the theme primary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Rendered spinner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinnerView {
    /// Spinner size
    pub size: SpinnerSize,
    /// Diameter in device units
    pub diameter: f32,
    /// Indicator color
    pub color: Color,
    /// Wrapper style (fills and centers)
    pub style: StyleProps,
}

impl Spinner {
    /// Create a spinner with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set size
    pub fn with_size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> SpinnerView {
        SpinnerView {
            size: self.size,
            diameter: self.size.pixels(),
            color: self
                .color
                .clone()
                .unwrap_or_else(|| ctx.theme.colors.primary.clone()),
            style: StyleProps {
                flex: Some(1.0),
                ..StyleProps::centered()
            },
        }
    }
}

// =============================================================================
// Press Handling
// =============================================================================

/// Touch gesture state for a pressable component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PressGesture {
    #[default]
    Idle,
    Pressed,
}

// =============================================================================
// Button Component
// =============================================================================

/// Which of the two button states rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    /// Pressable
    Idle,
    /// Showing a spinner, presses ignored
    Loading,
}

/// Themed button
///
/// The loading flag is owned by the caller; the button never changes it.
#[derive(Debug, Clone)]
pub struct Button<A = ()> {
    /// Show the spinner instead of the label and ignore presses
    pub loading: bool,
    /// Label content
    pub label: Option<Text>,
    /// Caller styles, applied after the computed ones
    pub style: StyleProps,
    on_press: Option<A>,
    gesture: PressGesture,
}

/// Rendered button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    /// Rendered state
    pub state: ButtonState,
    /// Whether the container accepts presses
    pub pressable: bool,
    /// Container style
    pub style: StyleProps,
    /// Label (idle only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextView>,
    /// Spinner (loading only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinner: Option<SpinnerView>,
}

impl<A> Default for Button<A> {
    fn default() -> Self {
        Self {
            loading: false,
            label: None,
            style: StyleProps::default(),
            on_press: None,
            gesture: PressGesture::Idle,
        }
    }
}

impl<A: Clone> Button<A> {
    /// Create an idle button with no label or action
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn with_label(mut self, label: Text) -> Self {
        self.label = Some(label);
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the action handed back on press
    pub fn on_press(mut self, action: A) -> Self {
        self.on_press = Some(action);
        self
    }

    /// Set caller styles
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Current render state
    pub fn state(&self) -> ButtonState {
        if self.loading {
            ButtonState::Loading
        } else {
            ButtonState::Idle
        }
    }

    /// Finger down; returns whether a gesture started
    pub fn press_in(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.gesture = PressGesture::Pressed;
        true
    }

    /// Finger up; completes the gesture when released inside
    ///
    /// Returns the press action at most once per gesture, and never while
    /// loading.
    pub fn release(&mut self, inside: bool) -> Option<A> {
        let gesture = std::mem::take(&mut self.gesture);
        if gesture != PressGesture::Pressed || !inside || self.loading {
            return None;
        }
        self.on_press.clone()
    }

    /// A complete press gesture (down then up inside)
    pub fn tap(&mut self) -> Option<A> {
        if !self.press_in() {
            return None;
        }
        self.release(true)
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> ButtonView {
        let base = StyleProps {
            background_color: Some(ctx.theme.colors.primary.clone()),
            border_radius: Some(ctx.radius(radius::R17)),
            border_curve: Some(BorderCurve::Continuous),
            height: Some(Dimension::px(ctx.vs(sizing::BUTTON_HEIGHT))),
            ..StyleProps::centered()
        };

        if self.loading {
            let transparent = StyleProps {
                background_color: Some(TRANSPARENT.to_string()),
                ..Default::default()
            };
            ButtonView {
                state: ButtonState::Loading,
                pressable: false,
                style: base.merge(&self.style).merge(&transparent),
                label: None,
                spinner: Some(Spinner::new().render(ctx)),
            }
        } else {
            ButtonView {
                state: ButtonState::Idle,
                pressable: true,
                style: base.merge(&self.style),
                label: self.label.as_ref().map(|l| l.render(ctx)),
                spinner: None,
            }
        }
    }
}

// =============================================================================
// Link Component
// =============================================================================

/// Pressable text
#[derive(Debug, Clone)]
pub struct Link<A = ()> {
    /// Label
    pub label: Text,
    on_press: Option<A>,
}

impl<A: Clone> Link<A> {
    /// Create a link
    pub fn new(label: Text, action: A) -> Self {
        Self {
            label,
            on_press: Some(action),
        }
    }

    /// Press the link
    pub fn tap(&self) -> Option<A> {
        self.on_press.clone()
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> TextView {
        self.label.render(ctx)
    }
}

// =============================================================================
// Screen Container
// =============================================================================

/// Root container for every screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenContainer {
    /// Caller styles, applied after the computed ones
    #[serde(default)]
    pub style: StyleProps,
}

/// Rendered screen container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenContainerView {
    /// Status bar content style to request
    pub status_bar: StatusBarStyle,
    /// Container style
    pub style: StyleProps,
}

impl ScreenContainer {
    /// Create a container with default styling
    pub fn new() -> Self {
        Self::default()
    }

    /// Set caller styles
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> ScreenContainerView {
        let base = StyleProps {
            padding_top: Some(ctx.viewport().top_inset()),
            flex: Some(1.0),
            background_color: Some(ctx.theme.colors.neutral.n900.clone()),
            ..Default::default()
        };
        ScreenContainerView {
            status_bar: StatusBarStyle::LightContent,
            style: base.merge(&self.style),
        }
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon stroke weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconWeight {
    /// Regular stroke
    #[default]
    Regular,
    /// Bold stroke
    Bold,
}

/// Icon from the app's icon set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name
    pub name: String,
    /// Design-space size
    pub size: f32,
    /// Color
    pub color: Color,
    /// Stroke weight
    #[serde(default)]
    pub weight: IconWeight,
}

/// Rendered icon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconView {
    /// Icon name
    pub name: String,
    /// Device-space size
    pub size: f32,
    /// Color
    pub color: Color,
    /// Stroke weight
    pub weight: IconWeight,
}

impl Icon {
    /// Create an icon
    pub fn new(name: impl Into<String>, size: f32, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
            weight: IconWeight::Regular,
        }
    }

    /// Set stroke weight
    pub fn with_weight(mut self, weight: IconWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> IconView {
        IconView {
            name: self.name.clone(),
            size: ctx.vs(self.size),
            color: self.color.clone(),
            weight: self.weight,
        }
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Text input
///
/// The input keeps the typed value and focus. Everything else (whether the
/// text is masked, which trailing icon to show) is a prop.
#[derive(Debug, Clone)]
pub struct Input<A = ()> {
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Current value
    pub value: String,
    /// Mask the typed characters
    pub secure_text_entry: bool,
    /// Leading icon slot
    pub leading_icon: Option<Icon>,
    /// Trailing icon slot
    pub trailing_icon: Option<Icon>,
    /// Caller styles, applied after the computed ones
    pub style: StyleProps,
    focused: bool,
    on_change_text: Option<fn(String) -> A>,
    on_trailing_icon_press: Option<A>,
}

/// Rendered input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Text to display (masked when secure)
    pub display_value: String,
    /// Whether the text is masked
    pub secure_text_entry: bool,
    /// Whether the field has focus
    pub focused: bool,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<IconView>,
    /// Trailing icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<IconView>,
    /// Whether the trailing icon is pressable
    pub trailing_pressable: bool,
    /// Container style
    pub style: StyleProps,
    /// Typed text style
    pub text_style: StyleProps,
}

/// Mask character for secure entry
pub const MASK_CHAR: char = '•';

impl<A> Default for Input<A> {
    fn default() -> Self {
        Self {
            placeholder: None,
            value: String::new(),
            secure_text_entry: false,
            leading_icon: None,
            trailing_icon: None,
            style: StyleProps::default(),
            focused: false,
            on_change_text: None,
            on_trailing_icon_press: None,
        }
    }
}

impl<A: Clone> Input<A> {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mask the typed characters
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure_text_entry = secure;
        self
    }

    /// Set the leading icon
    pub fn with_leading_icon(mut self, icon: Icon) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    /// Set the trailing icon
    pub fn with_trailing_icon(mut self, icon: Icon) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    /// Map typed text to an action
    pub fn on_change_text(mut self, handler: fn(String) -> A) -> Self {
        self.on_change_text = Some(handler);
        self
    }

    /// Set the action for a trailing icon press
    pub fn on_trailing_icon_press(mut self, action: A) -> Self {
        self.on_trailing_icon_press = Some(action);
        self
    }

    /// Whether the field has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the field focus
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Remove focus
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the typed text
    pub fn change_text(&mut self, text: impl Into<String>) -> Option<A> {
        self.value = text.into();
        self.on_change_text.map(|f| f(self.value.clone()))
    }

    /// Press the trailing icon
    pub fn press_trailing_icon(&self) -> Option<A> {
        self.trailing_icon.as_ref()?;
        self.on_trailing_icon_press.clone()
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> InputView {
        let colors = &ctx.theme.colors;
        let base = StyleProps {
            flex_direction: Some(FlexDirection::Row),
            height: Some(Dimension::px(ctx.vs(sizing::INPUT_HEIGHT))),
            align_items: Some(Alignment::Center),
            justify_content: Some(JustifyContent::Center),
            border_width: Some(sizing::INPUT_BORDER),
            border_color: Some(if self.focused {
                colors.primary.clone()
            } else {
                colors.neutral.n300.clone()
            }),
            border_radius: Some(ctx.radius(radius::R17)),
            border_curve: Some(BorderCurve::Continuous),
            padding: Some(Spacing::horizontal(ctx.space_x(spacing_x::S15))),
            gap: Some(ctx.space_x(spacing_x::S10)),
            ..Default::default()
        };

        let display_value = if self.secure_text_entry {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };

        InputView {
            placeholder: self.placeholder.clone(),
            display_value,
            secure_text_entry: self.secure_text_entry,
            focused: self.focused,
            leading_icon: self.leading_icon.as_ref().map(|i| i.render(ctx)),
            trailing_icon: self.trailing_icon.as_ref().map(|i| i.render(ctx)),
            trailing_pressable: self.trailing_icon.is_some()
                && self.on_trailing_icon_press.is_some(),
            style: base.merge(&self.style),
            text_style: StyleProps {
                flex: Some(1.0),
                color: Some(colors.text.clone()),
                font_size: Some(ctx.vs(font_size::SM)),
                ..Default::default()
            },
        }
    }
}

// =============================================================================
// Back Button Component
// =============================================================================

/// Icon button requesting back navigation
#[derive(Debug, Clone)]
pub struct BackButton<A = ()> {
    /// Design-space icon size (defaults to 26)
    pub icon_size: f32,
    /// Caller styles, applied after the computed ones
    pub style: StyleProps,
    on_press: Option<A>,
}

/// Rendered back button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackButtonView {
    /// The caret icon
    pub icon: IconView,
    /// Container style
    pub style: StyleProps,
}

impl<A: Clone> BackButton<A> {
    /// Create a back button handing back `action` on press
    pub fn new(action: A) -> Self {
        Self {
            icon_size: sizing::icon::LEADING,
            style: StyleProps::default(),
            on_press: Some(action),
        }
    }

    /// Set the icon size
    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    /// Press the button
    pub fn tap(&self) -> Option<A> {
        self.on_press.clone()
    }

    /// Render against a context
    pub fn render(&self, ctx: &UiContext) -> BackButtonView {
        let colors = &ctx.theme.colors;
        let base = StyleProps {
            align_self: Some(Alignment::FlexStart),
            background_color: Some(colors.neutral.n600.clone()),
            border_radius: Some(ctx.radius(radius::R12)),
            border_curve: Some(BorderCurve::Continuous),
            padding: Some(Spacing::Uniform(sizing::BACK_BUTTON_PADDING)),
            ..Default::default()
        };
        BackButtonView {
            icon: Icon::new("caret-left", self.icon_size, colors.white.clone())
                .with_weight(IconWeight::Bold)
                .render(ctx),
            style: base.merge(&self.style),
        }
    }
}

// =============================================================================
// Image Component
// =============================================================================

/// How an image fits its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale to fit inside, keeping aspect
    #[default]
    Contain,
    /// Scale to fill, cropping
    Cover,
}

/// Static image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Asset path
    pub source: String,
    /// Fit mode
    #[serde(default)]
    pub resize_mode: ResizeMode,
    /// Style
    #[serde(default)]
    pub style: StyleProps,
}

impl Image {
    /// Create an image from an asset path
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            resize_mode: ResizeMode::Contain,
            style: StyleProps::default(),
        }
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::{Platform, ScaleConfig};

    fn ctx(height: f32, platform: Platform) -> UiContext {
        let scale =
            ScaleEngine::new(Viewport::new(390.0, height, platform), ScaleConfig::default())
                .unwrap();
        UiContext::new(scale, Arc::new(Theme::standard()), Arc::new(AnimationGuard::new()))
    }

    // ==========================================================================
    // Style Merge Tests
    // ==========================================================================

    #[test]
    fn test_merge_overrides_win() {
        let base = StyleProps {
            color: Some("#111111".to_string()),
            font_size: Some(18.0),
            ..Default::default()
        };
        let overrides = StyleProps {
            color: Some("#222222".to_string()),
            text_align: Some(TextAlign::Center),
            ..Default::default()
        };
        let merged = base.merge(&overrides);
        assert_eq!(merged.color.as_deref(), Some("#222222"));
        assert_eq!(merged.font_size, Some(18.0));
        assert_eq!(merged.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let base = StyleProps::centered();
        assert_eq!(base.merge(&StyleProps::default()), base);
    }

    // ==========================================================================
    // Text Tests
    // ==========================================================================

    #[test]
    fn test_text_defaults() {
        let ctx = ctx(680.0, Platform::Ios);
        let view = Text::new("Hello").render(&ctx);
        assert_eq!(view.style.font_size, Some(18.0));
        assert_eq!(view.style.color, Some(ctx.theme.colors.text.clone()));
        assert_eq!(view.style.font_weight, Some(400));
    }

    #[test]
    fn test_text_size_is_scaled() {
        let ctx = ctx(850.0, Platform::Ios);
        let view = Text::new("Hey").size(30.0).weight(800).render(&ctx);
        // 30 * 850 / 680 = 37.5 -> 38
        assert_eq!(view.style.font_size, Some(38.0));
        assert_eq!(view.style.font_weight, Some(800));
    }

    #[test]
    fn test_text_caller_style_applied_last() {
        let ctx = ctx(680.0, Platform::Ios);
        let view = Text::new("Forgot Password?")
            .color("#AAAAAA")
            .with_style(StyleProps {
                color: Some("#BBBBBB".to_string()),
                align_self: Some(Alignment::FlexEnd),
                ..Default::default()
            })
            .render(&ctx);
        assert_eq!(view.style.color.as_deref(), Some("#BBBBBB"));
        assert_eq!(view.style.align_self, Some(Alignment::FlexEnd));
        assert_eq!(view.style.font_size, Some(18.0));
    }

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_idle_render() {
        let ctx = ctx(850.0, Platform::Ios);
        let view = Button::<()>::new()
            .with_label(Text::new("Login"))
            .render(&ctx);
        assert_eq!(view.state, ButtonState::Idle);
        assert!(view.pressable);
        assert_eq!(view.style.height, Some(Dimension::px(65.0)));
        assert_eq!(view.style.background_color, Some(ctx.theme.colors.primary.clone()));
        assert_eq!(view.style.border_curve, Some(BorderCurve::Continuous));
        assert!(view.label.is_some());
        assert!(view.spinner.is_none());
    }

    #[test]
    fn test_button_loading_render() {
        let ctx = ctx(680.0, Platform::Ios);
        let view = Button::<()>::new()
            .with_label(Text::new("Login"))
            .with_style(StyleProps {
                background_color: Some("#123456".to_string()),
                ..Default::default()
            })
            .loading(true)
            .render(&ctx);
        assert_eq!(view.state, ButtonState::Loading);
        assert!(!view.pressable);
        assert_eq!(view.style.background_color.as_deref(), Some(TRANSPARENT));
        assert!(view.label.is_none());
        let spinner = view.spinner.unwrap();
        assert_eq!(spinner.size, SpinnerSize::Large);
        assert_eq!(spinner.color, ctx.theme.colors.primary);
    }

    #[test]
    fn test_button_caller_style_merged_last() {
        let ctx = ctx(680.0, Platform::Ios);
        let view = Button::<()>::new()
            .with_style(StyleProps {
                margin: Some(Spacing::Uniform(15.0)),
                background_color: Some("#000000".to_string()),
                ..Default::default()
            })
            .render(&ctx);
        assert_eq!(view.style.margin, Some(Spacing::Uniform(15.0)));
        assert_eq!(view.style.background_color.as_deref(), Some("#000000"));
    }

    #[test]
    fn test_button_idle_tap_yields_action_once_per_tap() {
        let mut button = Button::new().on_press("submit");
        let mut count = 0;
        for _ in 0..3 {
            if button.tap().is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_button_loading_never_yields() {
        let mut button = Button::new().on_press("submit").loading(true);
        assert_eq!(button.tap(), None);
        assert!(!button.press_in());
        assert_eq!(button.release(true), None);
    }

    #[test]
    fn test_button_gesture_rules() {
        let mut button = Button::new().on_press(7);

        // Release without press does nothing
        assert_eq!(button.release(true), None);

        // Released outside cancels
        assert!(button.press_in());
        assert_eq!(button.release(false), None);

        // One press, one action; a second release is not a new press
        assert!(button.press_in());
        assert_eq!(button.release(true), Some(7));
        assert_eq!(button.release(true), None);

        // Switching to loading mid-gesture swallows the press
        assert!(button.press_in());
        button.loading = true;
        assert_eq!(button.release(true), None);
    }

    // ==========================================================================
    // Spinner Tests
    // ==========================================================================

    #[test]
    fn test_spinner_defaults() {
        let ctx = ctx(680.0, Platform::Android);
        let view = Spinner::new().render(&ctx);
        assert_eq!(view.size, SpinnerSize::Large);
        assert_eq!(view.color, ctx.theme.colors.primary);
        assert_eq!(view.style.flex, Some(1.0));
        assert_eq!(view.style.justify_content, Some(JustifyContent::Center));
        assert_eq!(view.style.align_items, Some(Alignment::Center));
    }

    #[test]
    fn test_spinner_overrides() {
        let ctx = ctx(680.0, Platform::Android);
        let view = Spinner::new()
            .with_size(SpinnerSize::Small)
            .with_color("#FFFFFF")
            .render(&ctx);
        assert_eq!(view.diameter, 20.0);
        assert_eq!(view.color, "#FFFFFF");
    }

    // ==========================================================================
    // Screen Container Tests
    // ==========================================================================

    #[test]
    fn test_screen_container_ios_inset() {
        let ctx = ctx(800.0, Platform::Ios);
        let view = ScreenContainer::new().render(&ctx);
        assert!((view.style.padding_top.unwrap() - 48.0).abs() < 1e-4);
        assert_eq!(view.status_bar, StatusBarStyle::LightContent);
        assert_eq!(view.style.background_color, Some(ctx.theme.colors.neutral.n900.clone()));
        assert_eq!(view.style.flex, Some(1.0));
    }

    #[test]
    fn test_screen_container_fallback_inset() {
        let ctx = ctx(800.0, Platform::Android);
        let view = ScreenContainer::new()
            .with_style(StyleProps {
                padding: Some(Spacing::horizontal(16.0)),
                ..Default::default()
            })
            .render(&ctx);
        assert_eq!(view.style.padding_top, Some(50.0));
        assert_eq!(view.style.padding, Some(Spacing::horizontal(16.0)));
    }

    // ==========================================================================
    // Input Tests
    // ==========================================================================

    #[derive(Debug, Clone, PartialEq)]
    enum FieldAction {
        Changed(String),
        ToggleMask,
    }

    #[test]
    fn test_input_change_text_maps_action() {
        let mut input = Input::new()
            .with_placeholder("Enter your Email")
            .on_change_text(FieldAction::Changed);
        let action = input.change_text("a@b.co");
        assert_eq!(action, Some(FieldAction::Changed("a@b.co".to_string())));
        assert_eq!(input.value, "a@b.co");
    }

    #[test]
    fn test_input_secure_masks_display() {
        let ctx = ctx(680.0, Platform::Ios);
        let input = Input::<FieldAction>::new().with_value("secret").secure(true);
        let view = input.render(&ctx);
        assert_eq!(view.display_value, "••••••");
        assert!(view.secure_text_entry);
    }

    #[test]
    fn test_input_trailing_icon_press() {
        let without_icon = Input::new().on_trailing_icon_press(FieldAction::ToggleMask);
        assert_eq!(without_icon.press_trailing_icon(), None);

        let with_icon = Input::new()
            .with_trailing_icon(Icon::new("eye", 24.0, "#D4D4D4"))
            .on_trailing_icon_press(FieldAction::ToggleMask);
        assert_eq!(with_icon.press_trailing_icon(), Some(FieldAction::ToggleMask));
    }

    #[test]
    fn test_input_focus_border() {
        let ctx = ctx(680.0, Platform::Ios);
        let mut input = Input::<FieldAction>::new();
        assert_eq!(
            input.render(&ctx).style.border_color,
            Some(ctx.theme.colors.neutral.n300.clone())
        );
        input.focus();
        assert!(input.is_focused());
        assert_eq!(
            input.render(&ctx).style.border_color,
            Some(ctx.theme.colors.primary.clone())
        );
        input.blur();
        assert!(!input.is_focused());
    }

    #[test]
    fn test_input_dimensions() {
        let ctx = ctx(680.0, Platform::Ios);
        let view = Input::<FieldAction>::new()
            .with_leading_icon(Icon::new("at", 26.0, "#A3A3A3"))
            .render(&ctx);
        assert_eq!(view.style.height, Some(Dimension::px(54.0)));
        assert_eq!(view.style.border_radius, Some(17.0));
        assert_eq!(view.leading_icon.unwrap().size, 26.0);
        assert_eq!(view.text_style.font_size, Some(14.0));
    }

    // ==========================================================================
    // Back Button / Link Tests
    // ==========================================================================

    #[test]
    fn test_back_button() {
        let ctx = ctx(850.0, Platform::Ios);
        let back = BackButton::new("back").with_icon_size(28.0);
        assert_eq!(back.tap(), Some("back"));
        let view = back.render(&ctx);
        assert_eq!(view.icon.size, 35.0);
        assert_eq!(view.icon.name, "caret-left");
        assert_eq!(view.style.background_color, Some(ctx.theme.colors.neutral.n600.clone()));
    }

    #[test]
    fn test_link_tap() {
        let link = Link::new(Text::new("Sign up"), 42);
        assert_eq!(link.tap(), Some(42));
    }

    #[test]
    fn test_view_serialization_skips_unset_fields() {
        let ctx = ctx(680.0, Platform::Ios);
        let json = serde_json::to_value(Text::new("Hi").render(&ctx)).unwrap();
        let style = json["style"].as_object().unwrap();
        assert_eq!(style.len(), 3);
        assert_eq!(json["style"]["fontSize"], serde_json::Value::Null);
        assert_eq!(json["style"]["font_size"], 18.0);
    }
}
