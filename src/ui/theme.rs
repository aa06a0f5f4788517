//! Theme and palettes for the glowing border
//! Supports both dark and light backdrops with a shared set of glow colors

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use serde::{Deserialize, Serialize};

// ============================================================================
// Backdrop Colors - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKDROP: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x000000);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKDROP: Color = color!(0xf5f5f5);
    pub const SURFACE: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
}

/// Hover highlight color (#3275F8)
pub const HIGHLIGHT: Color = color!(0x3275f8);

/// Initial glow color
pub const GLOW: Color = color!(0xffffff);

/// Translucent fill behind the gradient
pub const BORDER_BASE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.2,
};

/// Page background behind the widget
pub fn backdrop(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKDROP
    } else {
        light::BACKDROP
    }
}

/// Opaque fill of the widget's content area
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Label color on the content area
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Main color of the moving highlight with its lighter halo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub main: Color,
    pub light: Color,
}

impl ColorPair {
    pub const fn new(main: Color, light: Color) -> Self {
        Self { main, light }
    }

    /// Parse a pair of hex strings such as `#3275f8`
    pub fn parse(main: &str, light: &str) -> Option<Self> {
        Some(Self::new(
            main.parse::<Color>().ok()?,
            light.parse::<Color>().ok()?,
        ))
    }
}

/// Rendered when a palette has no entries
pub const FALLBACK_PAIR: ColorPair = ColorPair::new(
    Color::WHITE,
    Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.5,
    },
);

/// Fixed, ordered list of color pairs cycled in the steady phase
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pairs: Vec<ColorPair>,
}

impl Palette {
    pub fn new(pairs: Vec<ColorPair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair at `index`, wrapping modulo the palette size
    pub fn color_at(&self, index: usize) -> ColorPair {
        if self.is_empty() {
            return FALLBACK_PAIR;
        }
        self.pairs[index % self.pairs.len()]
    }
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalettePreset {
    /// Six cool-to-warm pairs
    #[default]
    Aurora,
    /// Five warm pairs
    Ember,
}

impl PalettePreset {
    pub fn palette(self) -> Palette {
        let pairs = match self {
            Self::Aurora => vec![
                ColorPair::new(color!(0xffffff), color!(0x3275f8, 0.6)),
                ColorPair::new(color!(0x3275f8), color!(0x7aa7ff, 0.6)),
                ColorPair::new(color!(0x8b5cf6), color!(0xc4b5fd, 0.6)),
                ColorPair::new(color!(0xec4899), color!(0xf9a8d4, 0.6)),
                ColorPair::new(color!(0x06b6d4), color!(0x67e8f9, 0.6)),
                ColorPair::new(color!(0x22c55e), color!(0x86efac, 0.6)),
            ],
            Self::Ember => vec![
                ColorPair::new(color!(0xf97316), color!(0xfdba74, 0.6)),
                ColorPair::new(color!(0xef4444), color!(0xfca5a5, 0.6)),
                ColorPair::new(color!(0xfbbf24), color!(0xfde68a, 0.6)),
                ColorPair::new(color!(0xdb2777), color!(0xf472b6, 0.6)),
                ColorPair::new(color!(0xffffff), color!(0xfed7aa, 0.6)),
            ],
        };
        Palette::new(pairs)
    }
}

// ============================================================================
// Widget styles
// ============================================================================

/// Default style of the widget's content area
pub fn content(theme: &Theme, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Transparent button so the content area style shows through
pub fn bare_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Disabled => Color {
            a: 0.5,
            ..text_primary(theme)
        },
        _ => text_primary(theme),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Page background container style
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop(theme))),
        ..Default::default()
    }
}
