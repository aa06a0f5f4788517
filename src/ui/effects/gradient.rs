//! Gradient descriptions and the pure gradient renderer
//!
//! A [`Gradient`] is a declarative stack of radial layers. The renderer maps
//! the widget's animation snapshot to one, without touching any timer; the
//! canvas primitive is the only consumer that turns it into pixels.

use std::fmt;

use iced::Color;

use crate::ui::animation::direction::Direction;
use crate::ui::animation::glow::Phase;
use crate::ui::animation::keyframes::GlowKeyframes;
use crate::ui::theme::{self, Palette};

/// A color at a relative offset (0.0 - 1.0) along a radial layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// One elliptical radial gradient
///
/// `center` and `radii` are percentages of the painted box.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialLayer {
    pub center: (f32, f32),
    pub radii: (f32, f32),
    pub stops: Vec<ColorStop>,
}

impl RadialLayer {
    /// Solid color fading to transparent at the rim
    pub fn fade(center: (f32, f32), radii: (f32, f32), color: Color) -> Self {
        Self {
            center,
            radii,
            stops: vec![
                ColorStop::new(0.0, color),
                ColorStop::new(1.0, Color { a: 0.0, ..color }),
            ],
        }
    }

    /// Interpolated color at a relative distance from the center
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = (b.offset - a.offset).max(f32::EPSILON);
                return mix(a.color, b.color, (t - a.offset) / span);
            }
        }
        self.stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
    }
}

/// Layered gradient, painted first layer first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    pub layers: Vec<RadialLayer>,
}

impl Gradient {
    pub fn new(layers: Vec<RadialLayer>) -> Self {
        Self { layers }
    }

    /// Append a layer painted on top of the existing ones
    pub fn with_layer(mut self, layer: RadialLayer) -> Self {
        self.layers.push(layer);
        self
    }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

/// Trim float noise so the textual form stays stable
fn pct(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

struct Css(Color);

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.into_rgba8();
        if a == u8::MAX {
            write!(f, "rgb({}, {}, {})", r, g, b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", r, g, b, pct(self.0.a))
        }
    }
}

impl fmt::Display for RadialLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radial-gradient({}% {}% at {}% {}%",
            pct(self.radii.0),
            pct(self.radii.1),
            pct(self.center.0),
            pct(self.center.1)
        )?;
        for stop in &self.stops {
            write!(f, ", {} {}%", Css(stop.color), pct(stop.offset * 100.0))?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

/// Everything the renderer reads for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub direction: Direction,
    pub color_index: usize,
    pub hovered: bool,
    /// Current keyframe while in the initial glow
    pub glow_frame: usize,
}

/// Ellipse placement for the moving highlight at each anchor
fn anchor(direction: Direction) -> ((f32, f32), (f32, f32)) {
    match direction {
        Direction::Top => ((50.0, 0.0), (20.7, 50.0)),
        Direction::Left => ((0.0, 50.0), (16.6, 43.1)),
        Direction::Bottom => ((50.0, 100.0), (20.7, 50.0)),
        Direction::Right => ((100.0, 50.0), (16.2, 41.2)),
    }
}

/// Static hover highlight covering the whole border
pub fn highlight_layer() -> RadialLayer {
    RadialLayer::fade((50.0, 50.0), (75.0, 181.16), theme::HIGHLIGHT)
}

/// Pure mapping from an animation snapshot to a gradient
#[derive(Debug, Clone)]
pub struct GradientRenderer {
    palette: Palette,
    keyframes: GlowKeyframes,
}

impl GradientRenderer {
    pub fn new(palette: Palette, keyframes: GlowKeyframes) -> Self {
        Self { palette, keyframes }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn keyframes(&self) -> &GlowKeyframes {
        &self.keyframes
    }

    pub fn render(&self, snapshot: &Snapshot) -> Gradient {
        let base = match snapshot.phase {
            Phase::InitialGlow => self.keyframes.frame(snapshot.glow_frame),
            Phase::Steady => self.directional(snapshot.direction, snapshot.color_index),
        };

        if snapshot.hovered {
            base.with_layer(highlight_layer())
        } else {
            base
        }
    }

    fn directional(&self, direction: Direction, color_index: usize) -> Gradient {
        let pair = self.palette.color_at(color_index);
        let (center, radii) = anchor(direction);

        Gradient::new(vec![RadialLayer {
            center,
            radii,
            stops: vec![
                ColorStop::new(0.0, pair.main),
                ColorStop::new(0.45, pair.light),
                ColorStop::new(1.0, Color { a: 0.0, ..pair.light }),
            ],
        }])
    }
}

/// Source-over blend of `top` onto `bottom`
pub fn over(top: Color, bottom: Color) -> Color {
    let a = top.a + bottom.a * (1.0 - top.a);
    if a <= f32::EPSILON {
        return Color::TRANSPARENT;
    }
    let blend = |t: f32, b: f32| (t * top.a + b * bottom.a * (1.0 - top.a)) / a;
    Color {
        r: blend(top.r, bottom.r),
        g: blend(top.g, bottom.g),
        b: blend(top.b, bottom.b),
        a,
    }
}

/// Composited color of every layer at a point given in percent of the box
pub fn composite_at(gradient: &Gradient, base: Color, x: f32, y: f32) -> Color {
    gradient.layers.iter().fold(base, |below, layer| {
        let (rx, ry) = layer.radii;
        if rx <= 0.0 || ry <= 0.0 {
            return below;
        }
        let dx = (x - layer.center.0) / rx;
        let dy = (y - layer.center.1) / ry;
        over(layer.sample((dx * dx + dy * dy).sqrt()), below)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::keyframes::KeyframeEasing;
    use crate::ui::theme::PalettePreset;

    fn renderer() -> GradientRenderer {
        GradientRenderer::new(
            PalettePreset::Aurora.palette(),
            GlowKeyframes::new(0.0, 12, KeyframeEasing::EaseInOut),
        )
    }

    fn steady(direction: Direction, color_index: usize, hovered: bool) -> Snapshot {
        Snapshot {
            phase: Phase::Steady,
            direction,
            color_index,
            hovered,
            glow_frame: 0,
        }
    }

    #[test]
    fn test_render_is_pure() {
        let r = renderer();
        let snap = steady(Direction::Left, 3, false);
        assert_eq!(r.render(&snap), r.render(&snap));
        assert_eq!(r.render(&snap).to_string(), r.render(&snap).to_string());
    }

    #[test]
    fn test_anchor_follows_direction() {
        let r = renderer();
        let top = r.render(&steady(Direction::Top, 0, false)).to_string();
        assert!(top.starts_with("radial-gradient(20.7% 50% at 50% 0%"), "{top}");
        let right = r.render(&steady(Direction::Right, 0, false)).to_string();
        assert!(right.starts_with("radial-gradient(16.2% 41.2% at 100% 50%"), "{right}");
    }

    #[test]
    fn test_hover_appends_highlight() {
        let r = renderer();
        let plain = r.render(&steady(Direction::Bottom, 1, false));
        let hovered = r.render(&steady(Direction::Bottom, 1, true));
        assert_eq!(hovered.layers.len(), plain.layers.len() + 1);
        assert_eq!(hovered.layers.last(), Some(&highlight_layer()));
        assert!(hovered.to_string().contains("75% 181.16% at 50% 50%, rgb(50, 117, 248) 0%"));
    }

    #[test]
    fn test_color_index_wraps() {
        let r = renderer();
        let len = r.palette().len();
        for i in 0..len {
            assert_eq!(
                r.render(&steady(Direction::Top, i, false)),
                r.render(&steady(Direction::Top, i + len, false))
            );
        }
    }

    #[test]
    fn test_initial_glow_uses_keyframes() {
        let r = renderer();
        let snap = Snapshot {
            phase: Phase::InitialGlow,
            direction: Direction::Top,
            color_index: 0,
            hovered: false,
            glow_frame: 5,
        };
        assert_eq!(r.render(&snap), r.keyframes().frame(5));
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let layer = RadialLayer::fade((50.0, 50.0), (10.0, 10.0), Color::WHITE);
        assert_eq!(layer.sample(0.0).a, 1.0);
        assert!((layer.sample(0.5).a - 0.5).abs() < 1e-6);
        assert_eq!(layer.sample(1.0).a, 0.0);
    }

    #[test]
    fn test_composite_follows_layers() {
        let gradient = Gradient::new(vec![RadialLayer::fade(
            (50.0, 0.0),
            (20.0, 50.0),
            Color::WHITE,
        )]);
        let at_anchor = composite_at(&gradient, Color::TRANSPARENT, 50.0, 0.0);
        assert_eq!(at_anchor, Color::WHITE);

        let outside = composite_at(&gradient, Color::BLACK, 50.0, 100.0);
        assert_eq!(outside, Color::BLACK);

        let halfway = composite_at(&gradient, Color::TRANSPARENT, 60.0, 0.0);
        assert!((halfway.a - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_over_opaque_top_wins() {
        let blended = over(Color::WHITE, Color::from_rgb(0.2, 0.4, 0.6));
        assert_eq!(blended, Color::WHITE);
        assert_eq!(over(Color::TRANSPARENT, Color::TRANSPARENT), Color::TRANSPARENT);
    }
}
