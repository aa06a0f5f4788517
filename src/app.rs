//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the controller picks up the timings
        let settings_path = crate::features::GlowSettings::file_path();
        let settings = crate::features::GlowSettings::load();

        // 2. Initialize sub-states
        let ui = UiState::new(&settings);
        let core = CoreState {
            settings,
            settings_path,
        };
        let mut app = Self { core, ui };

        // 3. Start the glow
        app.ui.glow.mount(iced::time::Instant::now());
        tracing::info!("Glow widget mounted in {:?}", app.ui.glow.phase());

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Glowborder".to_string()
    }

    /// Frames are only requested while a timer or fade is running
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.ui.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}
