//! Reusable UI widgets - composable components without app logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.

pub mod hover_border_gradient;

pub use hover_border_gradient::{HoverBorderGradient, Surface, apply_highlight_fade};

/// Create a hover border gradient around `content`
pub fn hover_border_gradient<'a, Message>(
    content: impl Into<iced::Element<'a, Message>>,
    gradient: crate::ui::effects::gradient::Gradient,
) -> HoverBorderGradient<'a, Message> {
    HoverBorderGradient::new(content, gradient)
}
