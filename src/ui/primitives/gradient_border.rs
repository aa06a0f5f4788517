//! Gradient border primitive
//!
//! Paints a [`Gradient`] description along a rounded outline using iced's
//! Canvas.
//!
//! # Design
//!
//! Canvas strokes only take solid colors or linear gradients, so the outline
//! is split into short segments and each one is stroked with the composited
//! gradient color at its midpoint. The canvas is meant to sit above the
//! content inside the padding ring, so it never paints the interior.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::effects::gradient::{Gradient, composite_at};
use crate::ui::theme;

/// Longest straight piece stroked with a single color
const MAX_SEGMENT: f32 = 3.0;

/// Points per quarter circle
const CORNER_STEPS: usize = 12;

/// Gradient border configuration
#[derive(Debug, Clone)]
pub struct GradientBorder {
    /// Layers to paint, first layer first
    pub gradient: Gradient,
    /// Corner radius, clamped to half the shorter side
    pub radius: f32,
    /// Stroke width of the ring
    pub width: f32,
    /// Fill composited under the gradient
    pub base_color: Color,
}

impl GradientBorder {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            radius: 0.0,
            width: 1.0,
            base_color: theme::BORDER_BASE,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }
}

/// Closed outline of a rounded rectangle inset by `inset`, clockwise from the
/// top edge
pub fn outline(size: Size, radius: f32, inset: f32) -> Vec<Point> {
    let w = (size.width - 2.0 * inset).max(0.0);
    let h = (size.height - 2.0 * inset).max(0.0);
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let r = (radius - inset).clamp(0.0, w.min(h) / 2.0);

    // Corner centers with the angle each quarter arc starts from
    let corners = [
        (Point::new(inset + w - r, inset + r), -std::f32::consts::FRAC_PI_2),
        (Point::new(inset + w - r, inset + h - r), 0.0),
        (Point::new(inset + r, inset + h - r), std::f32::consts::FRAC_PI_2),
        (Point::new(inset + r, inset + r), std::f32::consts::PI),
    ];

    let mut points = Vec::new();
    for (center, start) in corners {
        for step in 0..=CORNER_STEPS {
            let angle = start + std::f32::consts::FRAC_PI_2 * step as f32 / CORNER_STEPS as f32;
            let (sin, cos) = angle.sin_cos();
            let point = Point::new(center.x + r * cos, center.y + r * sin);
            push_subdivided(&mut points, point);
        }
    }
    if let Some(first) = points.first().copied() {
        push_subdivided(&mut points, first);
    }
    points
}

/// Append `point`, splitting long jumps from the previous point
fn push_subdivided(points: &mut Vec<Point>, point: Point) {
    if let Some(last) = points.last().copied() {
        let distance = last.distance(point);
        let pieces = (distance / MAX_SEGMENT).ceil() as usize;
        for i in 1..pieces {
            let t = i as f32 / pieces as f32;
            points.push(Point::new(
                last.x + (point.x - last.x) * t,
                last.y + (point.y - last.y) * t,
            ));
        }
        if distance <= f32::EPSILON {
            return;
        }
    }
    points.push(point);
}

impl<Message> Program<Message> for GradientBorder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        if self.width <= 0.0 || size.width <= 0.0 || size.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let points = outline(size, self.radius, self.width / 2.0);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let mid_x = (a.x + b.x) / 2.0 / size.width * 100.0;
            let mid_y = (a.y + b.y) / 2.0 / size.height * 100.0;
            let color = composite_at(&self.gradient, self.base_color, mid_x, mid_y);

            frame.stroke(
                &Path::line(a, b),
                Stroke::default()
                    .with_width(self.width)
                    .with_color(color)
                    .with_line_cap(LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create a gradient border element filling its parent
pub fn view_gradient_border<'a, Message: 'a>(border: GradientBorder) -> Element<'a, Message> {
    Canvas::new(border)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
