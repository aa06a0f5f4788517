// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;

use iced::time::Instant;

use crate::features::GlowSettings;
use crate::ui::animation::{GlowConfig, GlowController, GlowKeyframes, HighlightFade};
use crate::ui::effects::gradient::{Gradient, GradientRenderer};
use crate::ui::widgets::apply_highlight_fade;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings)
    pub core: CoreState,
    /// UI state (Glow animation, hover fade)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: GlowSettings,
    /// Where settings changes are written, `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
}

/// State behind the glowing widget
pub struct UiState {
    pub glow: GlowController,
    pub renderer: GradientRenderer,
    pub highlight: HighlightFade,
    /// Times the widget was pressed
    pub presses: u32,
}

impl UiState {
    pub fn new(settings: &GlowSettings) -> Self {
        let keyframes = GlowKeyframes::new(
            settings.glow_start_angle,
            settings.glow_keyframes as usize,
            settings.glow_easing,
        );

        Self {
            glow: GlowController::new(GlowConfig::from(settings)),
            renderer: GradientRenderer::new(settings.resolve_palette(), keyframes),
            highlight: HighlightFade::new(),
            presses: 0,
        }
    }

    /// Check if any animation needs frames
    pub fn has_active_animations(&self) -> bool {
        self.glow.needs_ticks() || self.highlight.is_animating()
    }

    /// Advance every animation to `now`
    pub fn tick(&mut self, now: Instant) {
        self.glow.advance(now);
        self.highlight.tick(now);
    }

    /// Gradient for the current frame
    pub fn gradient(&self) -> Gradient {
        let snapshot = self.glow.snapshot(self.renderer.keyframes());
        apply_highlight_fade(
            self.renderer.render(&snapshot),
            snapshot.hovered,
            self.highlight.opacity(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::ui::animation::Phase;
    use crate::ui::effects::gradient::highlight_layer;
    use crate::ui::theme;

    #[test]
    fn test_gradient_tracks_controller() {
        let settings = GlowSettings {
            initial_phase: Phase::Steady,
            ..Default::default()
        };
        let mut ui = UiState::new(&settings);
        let t0 = Instant::now();
        ui.glow.mount(t0);
        assert!(ui.has_active_animations());

        let before = ui.gradient();
        ui.tick(t0 + Duration::from_millis(750));
        assert_ne!(ui.gradient(), before);
    }

    #[test]
    fn test_hover_overlay_eases_in() {
        let mut ui = UiState::new(&GlowSettings::default());
        let t0 = Instant::now();
        ui.glow.mount(t0);
        let layers = ui.gradient().layers.len();

        ui.glow.set_hovered(true, t0);
        ui.highlight.set(true);
        assert_eq!(ui.glow.active_timers(), 0);

        // The overlay is part of the gradient at once but starts transparent
        let gradient = ui.gradient();
        assert_eq!(gradient.layers.len(), layers + 1);
        let overlay = &gradient.layers[layers];
        assert_eq!(overlay.center, highlight_layer().center);
        assert_eq!(overlay.radii, highlight_layer().radii);
        assert!(overlay.stops[0].color.a < 0.5);

        let t1 = Instant::now();
        for step in [0, 50, 100, 150, 250, 1000] {
            ui.tick(t1 + Duration::from_millis(step));
        }
        let overlay = ui.gradient().layers[layers].clone();
        assert!((overlay.stops[0].color.a - theme::HIGHLIGHT.a).abs() < 1e-3);
        assert!(!ui.highlight.is_animating());
    }
}
