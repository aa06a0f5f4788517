//! Initial glow keyframe generator
//!
//! Produces the finite sequence of gradients played during the initial glow:
//! two symmetric lobes orbiting the center while they widen, plus a pulsing
//! core. The sequence is lazy and can be replayed from the start.

use std::f32::consts::{PI, TAU};

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::ui::effects::gradient::{Gradient, RadialLayer};
use crate::ui::theme;

/// Easing curve applied across the keyframe sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyframeEasing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl KeyframeEasing {
    /// Map linear progress (0.0 - 1.0) onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Keyframes for the initial glow
#[derive(Debug, Clone, PartialEq)]
pub struct GlowKeyframes {
    /// Angle of the first lobe, in degrees
    start_angle: f32,
    steps: usize,
    easing: KeyframeEasing,
    color: Color,
    cursor: usize,
}

impl GlowKeyframes {
    pub fn new(start_angle: f32, steps: usize, easing: KeyframeEasing) -> Self {
        Self {
            start_angle,
            steps: steps.max(1),
            easing,
            color: theme::GLOW,
            cursor: 0,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Keyframe index reached after `progress` (0.0 - 1.0) of the glow
    pub fn frame_at(&self, progress: f32) -> usize {
        let index = (progress.clamp(0.0, 1.0) * self.steps as f32) as usize;
        index.min(self.steps - 1)
    }

    /// Gradient for keyframe `index`; indices past the end hold the last frame
    pub fn frame(&self, index: usize) -> Gradient {
        let index = index.min(self.steps - 1);
        let linear = if self.steps == 1 {
            1.0
        } else {
            index as f32 / (self.steps - 1) as f32
        };
        let t = self.easing.apply(linear);

        let angle = (self.start_angle + 360.0 * t).to_radians() % TAU;
        let (sin, cos) = angle.sin_cos();
        let reach = 50.0 * t;
        let radii = (10.0 + 40.0 * t, 25.0 + 75.0 * t);
        let pulse = 0.35 + 0.65 * (PI * t).sin();

        let lobe = Color {
            a: self.color.a * pulse,
            ..self.color
        };
        let core = Color {
            a: self.color.a * pulse * 0.5,
            ..self.color
        };

        Gradient::new(vec![
            RadialLayer::fade(
                (50.0, 50.0),
                (30.0 + 70.0 * t, 60.0 + 90.0 * t),
                core,
            ),
            RadialLayer::fade((50.0 + reach * cos, 50.0 + reach * sin), radii, lobe),
            RadialLayer::fade((50.0 - reach * cos, 50.0 - reach * sin), radii, lobe),
        ])
    }
}

impl Iterator for GlowKeyframes {
    type Item = Gradient;

    fn next(&mut self) -> Option<Gradient> {
        if self.cursor >= self.steps {
            return None;
        }
        let frame = self.frame(self.cursor);
        self.cursor += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps - self.cursor.min(self.steps);
        (left, Some(left))
    }
}

impl ExactSizeIterator for GlowKeyframes {}
