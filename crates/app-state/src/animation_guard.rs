//! One-shot entrance animation tracking
//!
//! Development tooling and state containers can remount a screen without a
//! real navigation event. Without a guard the screen's entrance animation
//! would visibly replay each time. The guard records, per screen key, that
//! the animation has already been consumed in this process.
//!
//! # Lifecycle
//!
//! - created empty at process start ([`AnimationGuard::global`])
//! - mutated only by [`AnimationGuard::should_animate`]
//! - never reset; a process restart is the only way to replay
//!
//! Screens receive the guard by injection, so tests build a fresh one with
//! [`AnimationGuard::new`].

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

static GLOBAL_GUARD: OnceLock<Arc<AnimationGuard>> = OnceLock::new();

/// Process-wide record of which screens already played their entrance
#[derive(Debug, Default)]
pub struct AnimationGuard {
    played: Mutex<HashSet<String>>,
}

impl AnimationGuard {
    /// Create an empty guard
    pub fn new() -> Self {
        Self::default()
    }

    /// The guard shared by the whole process
    pub fn global() -> Arc<AnimationGuard> {
        Arc::clone(GLOBAL_GUARD.get_or_init(|| Arc::new(AnimationGuard::new())))
    }

    /// Decide whether the screen identified by `key` should animate
    ///
    /// Returns `true` on the first call for `key` and records it; every
    /// later call returns `false`. Check and record happen under one lock.
    pub fn should_animate(&self, key: &str) -> bool {
        let first = self.played.lock().insert(key.to_string());
        tracing::debug!(screen = key, animate = first, "Entrance animation decision");
        first
    }

    /// Whether `key` has already consumed its animation
    pub fn has_played(&self, key: &str) -> bool {
        self.played.lock().contains(key)
    }

    /// Number of screens that have consumed their animation
    pub fn played_count(&self) -> usize {
        self.played.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_animates() {
        let guard = AnimationGuard::new();
        assert!(!guard.has_played("welcome"));
        assert!(guard.should_animate("welcome"));
        assert!(guard.has_played("welcome"));
    }

    #[test]
    fn test_subsequent_calls_suppressed() {
        let guard = AnimationGuard::new();
        assert!(guard.should_animate("welcome"));
        for _ in 0..10 {
            assert!(!guard.should_animate("welcome"));
        }
        assert_eq!(guard.played_count(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let guard = AnimationGuard::new();
        assert!(guard.should_animate("welcome"));
        assert!(guard.should_animate("login"));
        assert!(!guard.should_animate("welcome"));
        assert!(!guard.should_animate("login"));
        assert_eq!(guard.played_count(), 2);
    }

    #[test]
    fn test_fresh_instances_do_not_share_state() {
        let first = AnimationGuard::new();
        let second = AnimationGuard::new();
        assert!(first.should_animate("welcome"));
        assert!(second.should_animate("welcome"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = AnimationGuard::global();
        let b = AnimationGuard::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_callers_see_exactly_one_true() {
        let guard = Arc::new(AnimationGuard::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                std::thread::spawn(move || guard.should_animate("register"))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|animated| *animated)
            .count();
        assert_eq!(winners, 1);
    }
}
