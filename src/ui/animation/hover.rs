//! Hover highlight fade using iced_anim
//!
//! The gradient description switches to the highlight overlay the moment the
//! pointer enters; this only eases how strongly the overlay is painted.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Highlight fade duration (200ms for snappy feel)
const FADE_DURATION: Duration = Duration::from_millis(200);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

/// Eased opacity (0.0 - 1.0) of the hover highlight
#[derive(Debug)]
pub struct HighlightFade {
    animation: Animated<f32>,
}

impl Default for HighlightFade {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightFade {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade towards fully shown (`true`) or hidden (`false`)
    pub fn set(&mut self, hovered: bool) {
        let target = if hovered { 1.0 } else { 0.0 };
        self.animation.update(target.into());
    }

    /// Snap to hidden, used when the widget is torn down
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    pub fn opacity(&self) -> f32 {
        (*self.animation.value()).clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let fade = HighlightFade::new();
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_set_starts_fade() {
        let mut fade = HighlightFade::new();
        fade.set(true);
        assert!(fade.is_animating() || fade.opacity() > 0.0);
    }

    #[test]
    fn test_reset_hides() {
        let mut fade = HighlightFade::new();
        fade.set(true);
        fade.reset();
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_animating());
    }
}
