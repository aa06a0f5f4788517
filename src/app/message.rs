//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered (`true`) or left (`false`) the glowing widget
    HoverChanged(bool),
    /// Animation frame
    AnimationTick(Instant),
    /// Glowing widget pressed
    Pressed,
    /// Mount or unmount the glowing widget
    ToggleMounted,
    /// Switch the widget between a button and a plain container
    ToggleSurface,
}
