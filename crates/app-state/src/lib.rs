//! Application state for Tally
//!
//! This crate holds the small amount of process-wide and time-based state
//! the presentation layer needs: the one-shot entrance animation guard and
//! cancellable timers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation_guard;
pub mod timer;

pub use animation_guard::AnimationGuard;
pub use timer::{schedule, TimerHandle};
