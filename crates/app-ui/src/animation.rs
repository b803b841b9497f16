//! Declarative entrance animations
//!
//! A screen builds its entrance animations once at mount, then gates them on
//! the [`AnimationGuard`](app_state::AnimationGuard) result it captured. A
//! gated-off animation renders its element in the final state immediately.

use serde::{Deserialize, Serialize};

use crate::tokens::duration;

/// Entrance effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceKind {
    /// Opacity 0 to 1
    FadeIn,
    /// Opacity 0 to 1 while sliding down into place
    FadeInDown,
}

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Easing {
    /// Linear interpolation
    #[default]
    Linear,
    /// Damped spring
    Spring {
        /// Spring damping
        damping: f32,
    },
}

/// Entrance animation parameters for one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceAnimation {
    /// Whether the host should animate at all
    pub enabled: bool,
    /// Effect
    pub kind: EntranceKind,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Delay before start in milliseconds
    pub delay_ms: u32,
    /// Timing curve
    pub easing: Easing,
}

impl EntranceAnimation {
    fn new(kind: EntranceKind, duration_ms: u32) -> Self {
        Self {
            enabled: true,
            kind,
            duration_ms,
            delay_ms: duration::INSTANT,
            easing: Easing::Linear,
        }
    }

    /// Fade in over `duration_ms`
    pub fn fade_in(duration_ms: u32) -> Self {
        Self::new(EntranceKind::FadeIn, duration_ms)
    }

    /// Fade in while dropping into place over `duration_ms`
    pub fn fade_in_down(duration_ms: u32) -> Self {
        Self::new(EntranceKind::FadeInDown, duration_ms)
    }

    /// Start after `delay_ms`
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Use a damped spring curve
    pub fn springify(mut self, damping: f32) -> Self {
        self.easing = Easing::Spring { damping };
        self
    }

    /// Apply the mount-time guard decision
    ///
    /// When `animate` is false the element appears in its final state: no
    /// duration, no delay.
    pub fn gated(self, animate: bool) -> Self {
        if animate {
            return self;
        }
        Self {
            enabled: false,
            duration_ms: duration::INSTANT,
            delay_ms: duration::INSTANT,
            ..self
        }
    }

    /// Time from mount until the element is fully shown
    pub fn settles_after_ms(&self) -> u32 {
        if self.enabled {
            self.delay_ms + self.duration_ms
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let anim = EntranceAnimation::fade_in_down(1000)
            .with_delay(200)
            .springify(12.0);
        assert!(anim.enabled);
        assert_eq!(anim.kind, EntranceKind::FadeInDown);
        assert_eq!(anim.delay_ms, 200);
        assert_eq!(anim.easing, Easing::Spring { damping: 12.0 });
        assert_eq!(anim.settles_after_ms(), 1200);
    }

    #[test]
    fn test_gated_on_keeps_parameters() {
        let anim = EntranceAnimation::fade_in(1000).with_delay(100);
        assert_eq!(anim.gated(true), anim);
    }

    #[test]
    fn test_gated_off_renders_final_state() {
        let anim = EntranceAnimation::fade_in_down(1000)
            .with_delay(200)
            .springify(12.0)
            .gated(false);
        assert!(!anim.enabled);
        assert_eq!(anim.duration_ms, 0);
        assert_eq!(anim.delay_ms, 0);
        assert_eq!(anim.kind, EntranceKind::FadeInDown);
        assert_eq!(anim.settles_after_ms(), 0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(EntranceAnimation::fade_in(1000).springify(12.0)).unwrap();
        assert_eq!(json["kind"], "fade-in");
        assert_eq!(json["easing"]["type"], "spring");
    }
}
