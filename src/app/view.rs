// src/app/view.rs
//! Application view rendering

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::widgets::Surface;
use crate::ui::{theme, widgets};

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let settings = &self.core.settings;

        let glow: Element<'_, Message> = if self.ui.glow.is_mounted() {
            widgets::hover_border_gradient(text("Glowwwy").size(20), self.ui.gradient())
                .surface(settings.surface)
                .radius(settings.corner_radius)
                .border_width(settings.border_width)
                .padding([16.0, 32.0])
                .on_hover(Message::HoverChanged)
                .on_press(Message::Pressed)
                .into()
        } else {
            text("Unmounted").size(14).into()
        };

        let toggle_label = if self.ui.glow.is_mounted() {
            "Unmount"
        } else {
            "Mount"
        };

        let surface_label = match settings.surface {
            Surface::Button => "As container",
            Surface::Container => "As button",
        };

        let glow_state = &self.ui.glow;
        let status = text(format!(
            "{:?} / {:?} / color {}/{} / hovered {} / pressed {}",
            glow_state.phase(),
            glow_state.direction(),
            glow_state.color_index() + 1,
            self.ui.renderer.palette().len(),
            glow_state.is_hovered(),
            self.ui.presses
        ))
        .size(12);

        let timing = text(format!(
            "timers {} / glow {:.0}% of {} frames / transitions {}",
            glow_state.active_timers(),
            glow_state.glow_progress() * 100.0,
            self.ui.renderer.keyframes().steps(),
            glow_state.transitions()
        ))
        .size(12);

        let controls = row![
            button(text(toggle_label).size(12)).on_press(Message::ToggleMounted),
            button(text(surface_label).size(12)).on_press(Message::ToggleSurface),
        ]
        .spacing(12);

        let content = column![glow, controls, status, timing]
            .spacing(24)
            .align_x(Alignment::Center);

        container(content)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::page)
            .into()
    }
}
