//! Visual themes and the class names each one renders with.

use std::str::FromStr;

/// Site-wide theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl Theme {
    /// All themes, in selector order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Colorful];

    /// Storage value and root class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }

    /// Human-readable label for the theme selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Colorful => "Colorful",
        }
    }

    /// Resolve a persisted preference, falling back to [`Theme::Light`].
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Inline root background for themes that paint the whole page.
    pub fn root_background(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Colorful => Some(("linear-gradient(135deg, #ff9a9e, #fad0c4)", "#1a1a1a")),
            _ => None,
        }
    }
}

/// Returned when a string does not name a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "colorful" => Ok(Self::Colorful),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Class names a page derives from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub outer_bg: &'static str,
    pub card_bg: &'static str,
    pub text_primary: &'static str,
    pub text_subtle: &'static str,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                outer_bg: "bg-gray-50",
                card_bg: "bg-white",
                text_primary: "text-gray-900",
                text_subtle: "text-gray-600",
            },
            Theme::Dark => Self {
                outer_bg: "bg-black",
                card_bg: "bg-[#1f2430]",
                text_primary: "text-white",
                text_subtle: "text-gray-300",
            },
            Theme::Colorful => Self {
                outer_bg: "bg-gradient-to-br from-pink-400 via-purple-500 to-indigo-600",
                card_bg: "bg-white/10 backdrop-blur-md",
                text_primary: "text-white",
                text_subtle: "text-gray-300",
            },
        }
    }
}
