//! Hover border gradient widget
//!
//! A button or container whose border carries the animated gradient. The
//! widget is stateless: the caller owns the [`GlowController`], renders a
//! [`Gradient`] from it and forwards the pointer callbacks back.
//!
//! [`GlowController`]: crate::ui::animation::GlowController

use iced::widget::{button, container, mouse_area, stack};
use iced::{Element, Padding, Theme};
use serde::{Deserialize, Serialize};

use crate::ui::effects::gradient::{Gradient, highlight_layer};
use crate::ui::primitives::{GradientBorder, view_gradient_border};
use crate::ui::theme;

/// Interactive element wrapped by the border
///
/// Any surface works as long as it can be styled and reports pointer
/// enter/leave; pointer tracking is done by the surrounding `mouse_area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Pressable button, forwards `on_press`
    #[default]
    Button,
    /// Plain container
    Container,
}

impl Surface {
    /// The other surface kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Button => Self::Container,
            Self::Container => Self::Button,
        }
    }
}

type StyleFn<'a> = Box<dyn Fn(&Theme) -> container::Style + 'a>;

/// Builder for the hover border gradient widget
pub struct HoverBorderGradient<'a, Message> {
    content: Element<'a, Message>,
    gradient: Gradient,
    surface: Surface,
    radius: f32,
    border_width: f32,
    padding: Padding,
    on_hover: Option<Box<dyn Fn(bool) -> Message + 'a>>,
    on_press: Option<Message>,
    container_style: Option<StyleFn<'a>>,
    content_style: Option<StyleFn<'a>>,
}

impl<'a, Message> HoverBorderGradient<'a, Message> {
    pub fn new(content: impl Into<Element<'a, Message>>, gradient: Gradient) -> Self {
        Self {
            content: content.into(),
            gradient,
            surface: Surface::default(),
            radius: 999.0,
            border_width: 1.0,
            padding: Padding::from([8.0, 16.0]),
            on_hover: None,
            on_press: None,
            container_style: None,
            content_style: None,
        }
    }

    /// Element type wrapped by the border
    pub fn surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Message produced when the pointer enters (`true`) or leaves (`false`)
    pub fn on_hover(mut self, on_hover: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Message produced on press, only used by [`Surface::Button`]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Style of the outer container
    pub fn container_style(mut self, style: impl Fn(&Theme) -> container::Style + 'a) -> Self {
        self.container_style = Some(Box::new(style));
        self
    }

    /// Style of the inner content area
    pub fn content_style(mut self, style: impl Fn(&Theme) -> container::Style + 'a) -> Self {
        self.content_style = Some(Box::new(style));
        self
    }
}

impl<'a, Message: Clone + 'a> From<HoverBorderGradient<'a, Message>> for Element<'a, Message> {
    fn from(widget: HoverBorderGradient<'a, Message>) -> Self {
        let HoverBorderGradient {
            content,
            gradient,
            surface,
            radius,
            border_width,
            padding,
            on_hover,
            on_press,
            container_style,
            content_style,
        } = widget;

        let inner = container(content)
            .padding(padding)
            .style(move |theme| match &content_style {
                Some(style) => style(theme),
                None => theme::content(theme, radius),
            });

        let inner: Element<'a, Message> = match surface {
            Surface::Button => button(inner)
                .padding(0)
                .style(theme::bare_button)
                .on_press_maybe(on_press)
                .into(),
            Surface::Container => inner.into(),
        };

        let border = GradientBorder::new(gradient)
            .radius(radius + border_width)
            .width(border_width);

        let layered = stack![
            container(inner).padding(border_width),
            view_gradient_border(border),
        ];

        let outer = container(layered).style(move |theme| match &container_style {
            Some(style) => style(theme),
            None => container::Style::default(),
        });

        let area = mouse_area(outer);
        match on_hover {
            Some(on_hover) => area.on_enter(on_hover(true)).on_exit(on_hover(false)).into(),
            None => area.into(),
        }
    }
}

/// Blend the hover highlight by the fade opacity
///
/// While hovered the highlight is the gradient's last layer; after the
/// pointer leaves it is re-added so it can fade out.
pub fn apply_highlight_fade(mut gradient: Gradient, hovered: bool, opacity: f32) -> Gradient {
    let opacity = opacity.clamp(0.0, 1.0);
    if !hovered {
        if opacity <= 0.0 {
            return gradient;
        }
        gradient = gradient.with_layer(highlight_layer());
    }
    if let Some(layer) = gradient.layers.last_mut() {
        for stop in &mut layer.stops {
            stop.color.a *= opacity;
        }
    }
    gradient
}
