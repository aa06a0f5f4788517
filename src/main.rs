//! Glowborder - an animated hover border gradient widget
//! Built with iced, shown in a small demo window

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(480.0, 320.0))
        .antialiasing(true)
        .run()
        .context("glow window failed")
}
