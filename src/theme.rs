use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio_theme";

static DARK_STARS: &[&str] = &["#6C63FF", "#2EC4B6", "#FFD700", "#ffffff"];
static LIGHT_STARS: &[&str] = &["#3b82f6", "#6366f1", "#8b5cf6", "#a855f7"];
static DARK_FIELD: &[&str] = &["#6C63FF", "#2EC4B6", "#cbd5e1"];
static LIGHT_FIELD: &[&str] = &["#3b82f6", "#0d9488", "#64748b"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class put on `<html>`; tailwind's `dark:` variants key off `dark`.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark dark",
            Self::Light => "theme-light",
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "bg-slate-900 text-slate-50",
            Self::Light => "bg-slate-50 text-slate-900",
        }
    }

    pub fn star_palette(self) -> &'static [&'static str] {
        match self {
            Self::Dark => DARK_STARS,
            Self::Light => LIGHT_STARS,
        }
    }

    pub fn field_palette(self) -> &'static [&'static str] {
        match self {
            Self::Dark => DARK_FIELD,
            Self::Light => LIGHT_FIELD,
        }
    }

    /// Canvas blend mode so the glow reads on either background.
    pub fn blend_class(self) -> &'static str {
        match self {
            Self::Dark => "mix-blend-screen",
            Self::Light => "mix-blend-multiply",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_storage_format() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.star_palette(), Theme::Light.star_palette());
        assert!(!Theme::Light.field_palette().is_empty());
        assert!(Theme::Dark.root_class().contains("dark"));
        assert!(!Theme::Light.root_class().contains("dark"));
    }
}
