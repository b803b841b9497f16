//! Tally
//!
//! Presentation core of the Tally personal-finance app: a splash to
//! onboarding to authentication flow built from themed, responsive
//! primitives.
//!
//! This crate is the app shell. It wires the workspace crates together:
//!
//! - `app-platform` - viewport capture and responsive scaling
//! - `app-state` - entrance animation guard and cancellable timers
//! - `app-core` - form validation and the submit seam
//! - `app-ui` - theme, primitives, navigation and screens
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tally::{App, AppConfig};
//! use app_core::SubmitHandler;
//! use app_platform::{Platform, Viewport};
//! use app_state::AnimationGuard;
//!
//! # async fn run(handler: Arc<dyn SubmitHandler>) -> tally::Result<()> {
//! let config = AppConfig::default();
//! tally::logging::init(&config.log_filter);
//!
//! let viewport = Viewport::new(390.0, 844.0, Platform::Ios);
//! let mut app = App::start(config, viewport, AnimationGuard::global(), handler)?;
//! app.run_until(app_ui::Route::Welcome).await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
