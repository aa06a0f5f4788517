//! Message update handlers

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HoverChanged(hovered) => {
                self.ui.glow.set_hovered(hovered, Instant::now());
                self.ui.highlight.set(hovered);
            }
            Message::AnimationTick(now) => {
                self.ui.tick(now);
            }
            Message::Pressed => {
                self.ui.presses += 1;
                tracing::info!("Glow widget pressed ({} times)", self.ui.presses);
            }
            Message::ToggleMounted => {
                if self.ui.glow.is_mounted() {
                    self.ui.glow.unmount();
                    self.ui.highlight.reset();
                } else {
                    self.ui.glow.mount(Instant::now());
                }
            }
            Message::ToggleSurface => {
                let settings = &mut self.core.settings;
                settings.surface = settings.surface.toggled();
                tracing::info!("Glow widget surface: {:?}", settings.surface);

                if let Some(path) = &self.core.settings_path {
                    if let Err(e) = settings.save_to_file(path) {
                        tracing::error!("Failed to save settings: {}", e);
                    }
                }
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::features::GlowSettings;
    use crate::ui::widgets::Surface;

    fn app() -> App {
        let settings = GlowSettings::default();
        let ui = UiState::new(&settings);
        let mut app = App {
            core: CoreState {
                settings,
                settings_path: None,
            },
            ui,
        };
        app.ui.glow.mount(Instant::now());
        app
    }

    #[test]
    fn test_toggle_mount_releases_timers() {
        let mut app = app();
        assert!(app.ui.glow.active_timers() > 0);

        let _ = app.update(Message::ToggleMounted);
        assert!(!app.ui.glow.is_mounted());
        assert_eq!(app.ui.glow.active_timers(), 0);
        assert!(!app.ui.has_active_animations());

        let _ = app.update(Message::ToggleMounted);
        assert!(app.ui.glow.is_mounted());
        assert!(app.ui.glow.active_timers() > 0);
    }

    #[test]
    fn test_hover_stops_timers() {
        let mut app = app();
        let _ = app.update(Message::HoverChanged(true));
        assert_eq!(app.ui.glow.active_timers(), 0);
        let _ = app.update(Message::HoverChanged(false));
        assert_eq!(app.ui.glow.active_timers(), 1);
    }

    #[test]
    fn test_toggle_surface_persists() {
        let path = std::env::temp_dir()
            .join(format!("glowborder-surface-{}", std::process::id()))
            .join("settings.json");
        let mut app = app();
        app.core.settings_path = Some(path.clone());

        let _ = app.update(Message::ToggleSurface);
        assert_eq!(app.core.settings.surface, Surface::Container);
        assert_eq!(GlowSettings::load_or_default(&path), app.core.settings);

        let _ = app.update(Message::ToggleSurface);
        assert_eq!(app.core.settings.surface, Surface::Button);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_press_counts() {
        let mut app = app();
        let _ = app.update(Message::Pressed);
        let _ = app.update(Message::Pressed);
        assert_eq!(app.ui.presses, 2);
    }
}
