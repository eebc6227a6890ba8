use std::{fmt, str::FromStr};

use crate::foundation::{
    core::Rgba8,
    error::{ShortformError, ShortformResult},
};

/// Primary/secondary/background colors a renderer paints a video with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorPalette {
    /// Accent color (brand text, active indicators, card borders).
    pub primary: Rgba8,
    /// Secondary accent (card gradient tail).
    pub secondary: Rgba8,
    /// Background gradient base.
    pub background: Rgba8,
}

impl ColorPalette {
    const fn rgb(primary: [u8; 3], secondary: [u8; 3], background: [u8; 3]) -> Self {
        Self {
            primary: Rgba8::rgb(primary[0], primary[1], primary[2]),
            secondary: Rgba8::rgb(secondary[0], secondary[1], secondary[2]),
            background: Rgba8::rgb(background[0], background[1], background[2]),
        }
    }

    /// Inactive progress-indicator color (translucent white).
    pub fn inactive_indicator(&self) -> Rgba8 {
        Rgba8::rgb(0xFF, 0xFF, 0xFF).with_alpha(0x33)
    }
}

/// Market-news video slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NewsTheme {
    /// Opening bell preview.
    MarketOpen,
    /// Midday update.
    Midday,
    /// Closing summary.
    MarketClose,
    /// Global markets impact.
    Global,
    /// Next-day preview.
    Preview,
}

impl NewsTheme {
    /// Every news theme, in schedule order.
    pub const ALL: [Self; 5] = [
        Self::MarketOpen,
        Self::Midday,
        Self::MarketClose,
        Self::Global,
        Self::Preview,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::MarketOpen => "market_open",
            Self::Midday => "midday",
            Self::MarketClose => "market_close",
            Self::Global => "global",
            Self::Preview => "preview",
        }
    }

    fn palette(self) -> ColorPalette {
        match self {
            Self::MarketOpen => ColorPalette::rgb([0x10, 0xB9, 0x81], [0x05, 0x96, 0x69], [0x06, 0x4E, 0x3B]),
            Self::Midday => ColorPalette::rgb([0x3B, 0x82, 0xF6], [0x25, 0x63, 0xEB], [0x1E, 0x3A, 0x8A]),
            Self::MarketClose => ColorPalette::rgb([0xEF, 0x44, 0x44], [0xDC, 0x26, 0x26], [0x7F, 0x1D, 0x1D]),
            Self::Global => ColorPalette::rgb([0x8B, 0x5C, 0xF6], [0x7C, 0x3A, 0xED], [0x5B, 0x21, 0xB6]),
            Self::Preview => ColorPalette::rgb([0xF5, 0x9E, 0x0B], [0xD9, 0x77, 0x06], [0x78, 0x35, 0x0F]),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::MarketOpen => "Market Opening Preview",
            Self::Midday => "Midday Market Update",
            Self::MarketClose => "Market Closing Summary",
            Self::Global => "Global Markets Impact on India",
            Self::Preview => "Tomorrow's Market Preview",
        }
    }
}

/// Content categories for the fact-video variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactCategory {
    /// Wildlife.
    Animals,
    /// Astronomy.
    Space,
    /// Marine life.
    Ocean,
    /// Physics, chemistry, biology.
    Science,
    /// Historical events.
    History,
    /// Natural phenomena.
    Nature,
    /// Anatomy and health.
    HumanBody,
    /// Tech and innovation.
    Technology,
    /// Anything else.
    General,
}

impl FactCategory {
    /// Every fact category.
    pub const ALL: [Self; 9] = [
        Self::Animals,
        Self::Space,
        Self::Ocean,
        Self::Science,
        Self::History,
        Self::Nature,
        Self::HumanBody,
        Self::Technology,
        Self::General,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Space => "space",
            Self::Ocean => "ocean",
            Self::Science => "science",
            Self::History => "history",
            Self::Nature => "nature",
            Self::HumanBody => "human_body",
            Self::Technology => "technology",
            Self::General => "general",
        }
    }

    fn palette(self) -> ColorPalette {
        match self {
            Self::Animals => ColorPalette::rgb([0x84, 0xCC, 0x16], [0x65, 0xA3, 0x0D], [0x36, 0x53, 0x14]),
            Self::Space => ColorPalette::rgb([0x63, 0x66, 0xF1], [0x4F, 0x46, 0xE5], [0x1E, 0x1B, 0x4B]),
            Self::Ocean => ColorPalette::rgb([0x06, 0xB6, 0xD4], [0x08, 0x91, 0xB2], [0x16, 0x4E, 0x63]),
            Self::Science => ColorPalette::rgb([0x14, 0xB8, 0xA6], [0x0D, 0x94, 0x88], [0x13, 0x4E, 0x4A]),
            Self::History => ColorPalette::rgb([0xD9, 0x77, 0x06], [0xB4, 0x53, 0x09], [0x45, 0x1A, 0x03]),
            Self::Nature => ColorPalette::rgb([0x22, 0xC5, 0x5E], [0x16, 0xA3, 0x4A], [0x14, 0x53, 0x2D]),
            Self::HumanBody => ColorPalette::rgb([0xF4, 0x3F, 0x5E], [0xE1, 0x1D, 0x48], [0x4C, 0x05, 0x19]),
            Self::Technology => ColorPalette::rgb([0x0E, 0xA5, 0xE9], [0x02, 0x84, 0xC7], [0x0C, 0x4A, 0x6E]),
            Self::General => ColorPalette::rgb([0xEC, 0x48, 0x99], [0xDB, 0x27, 0x77], [0x50, 0x07, 0x24]),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Animals => "Amazing Animal Facts",
            Self::Space => "Mind-Blowing Space Facts",
            Self::Ocean => "Deep Ocean Facts",
            Self::Science => "Surprising Science Facts",
            Self::History => "Forgotten History Facts",
            Self::Nature => "Incredible Nature Facts",
            Self::HumanBody => "Human Body Facts",
            Self::Technology => "Technology Facts",
            Self::General => "Amazing Facts",
        }
    }
}

/// Closed set of video themes. Each variant maps to exactly one [`ColorPalette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    /// Market-news slot.
    News(NewsTheme),
    /// Fact-video category.
    Fact(FactCategory),
}

impl Theme {
    /// Wire name (`market_open`, `human_body`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::News(t) => t.name(),
            Self::Fact(c) => c.name(),
        }
    }

    /// Palette for this theme.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::News(t) => t.palette(),
            Self::Fact(c) => c.palette(),
        }
    }

    /// Human-readable heading used in video descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::News(t) => t.label(),
            Self::Fact(c) => c.label(),
        }
    }

    /// Every theme: news slots first, then fact categories.
    pub fn all() -> impl Iterator<Item = Self> {
        NewsTheme::ALL
            .into_iter()
            .map(Self::News)
            .chain(FactCategory::ALL.into_iter().map(Self::Fact))
    }
}

impl FromStr for Theme {
    type Err = ShortformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|t| t.name() == s)
            .ok_or_else(|| ShortformError::unknown_theme(s))
    }
}

impl TryFrom<String> for Theme {
    type Error = ShortformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        value.name().to_owned()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a theme name to its palette. Names outside the closed set fail with
/// [`ShortformError::UnknownTheme`]; there is no fallback palette.
pub fn resolve_theme(name: &str) -> ShortformResult<ColorPalette> {
    name.parse::<Theme>().map(Theme::palette)
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
