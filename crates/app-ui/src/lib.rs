//! User interface for Tally
//!
//! This crate provides the presentation layer of the onboarding flow:
//! theming, responsive primitives, entrance animations, navigation, and the
//! four screens (splash, welcome, login, register).
//!
//! # Design System
//!
//! A single dark theme built around a lime primary (#A3E635) on a
//! near-black background (neutral 900). Every size is authored against a
//! 375x680 reference screen and scaled at render time by the
//! [`UiContext`].
//!
//! # Modules
//!
//! - [`theme`] - Theme registry and color palette
//! - [`tokens`] - Design tokens (spacing, radius, sizing, durations)
//! - [`typography`] - Font size scale
//! - [`components`] - UI primitives
//! - [`animation`] - Declarative entrance animations
//! - [`navigation`] - Routes, stack, and transition orchestration
//! - [`screens`] - Application screens
//!
//! # Example
//!
//! ```rust
//! use app_platform::{Platform, ScaleConfig, ScaleEngine, Viewport};
//! use app_ui::components::{Text, UiContext};
//!
//! let scale = ScaleEngine::new(
//!     Viewport::new(390.0, 850.0, Platform::Ios),
//!     ScaleConfig::default(),
//! )
//! .unwrap();
//! let ctx = UiContext::with_globals(scale);
//!
//! let view = Text::new("Hey,").size(30.0).render(&ctx);
//! assert_eq!(view.style.font_size, Some(38.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{Color, Theme, ThemeColors};

pub use tokens::{duration, font_weight, radius, sizing, spacing_x, spacing_y, spring};

pub use typography::{font_size, TextAlign};

pub use animation::{Easing, EntranceAnimation, EntranceKind};

pub use components::{
    BackButton, Button, ButtonState, Icon, Input, Link, ScreenContainer, Spinner, SpinnerSize,
    StatusBarStyle, StyleProps, Text, UiContext,
};

pub use navigation::{
    NavEvent, NavigationAnimation, NavigationOrchestrator, NavigationStack, Navigator, Route,
    StackEntry, Transition,
};

pub use screens::{
    Alert, ElementView, MountedScreen, Node, Screen, ScreenAction, ScreenView, UiEvent,
};
