//! Named color themes, in the order the theme picker lists them.

use egui::{Color32, Context, Visuals};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme {0:?}")]
    Unknown(String),
    #[error("invalid color {value:?} for {role}")]
    BadColor { role: &'static str, value: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Light,
    Dark,
}

/// Color roles of a custom palette, as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub neutral: &'static str,
    pub base_100: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    BuiltIn { name: &'static str, scheme: Scheme },
    Custom { name: &'static str, scheme: Scheme, palette: Palette },
}

pub const BLACK: Palette = Palette {
    primary: "#000000",
    secondary: "#191919",
    accent: "#313131",
    neutral: "#4a4a4a",
    base_100: "#000000",
    info: "#2094f3",
    success: "#009485",
    warning: "#ff9900",
    error: "#ff5724",
};

pub const THEMES: &[Theme] = &[
    Theme::BuiltIn { name: "light", scheme: Scheme::Light },
    Theme::BuiltIn { name: "dark", scheme: Scheme::Dark },
    Theme::Custom { name: "black", scheme: Scheme::Dark, palette: BLACK },
    Theme::BuiltIn { name: "cupcake", scheme: Scheme::Light },
    Theme::BuiltIn { name: "emerald", scheme: Scheme::Light },
    Theme::BuiltIn { name: "retro", scheme: Scheme::Light },
    Theme::BuiltIn { name: "cyberpunk", scheme: Scheme::Light },
    Theme::BuiltIn { name: "synthwave", scheme: Scheme::Dark },
    Theme::BuiltIn { name: "valentine", scheme: Scheme::Light },
    Theme::BuiltIn { name: "halloween", scheme: Scheme::Dark },
];

pub fn find(name: &str) -> Result<Theme, ThemeError> {
    THEMES
        .iter()
        .copied()
        .find(|theme| theme.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| ThemeError::Unknown(name.to_string()))
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::BuiltIn { name, .. } | Theme::Custom { name, .. } => *name,
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::BuiltIn { scheme, .. } | Theme::Custom { scheme, .. } => *scheme,
        }
    }

    pub fn visuals(&self) -> Result<Visuals, ThemeError> {
        let mut visuals = match self.scheme() {
            Scheme::Light => Visuals::light(),
            Scheme::Dark => Visuals::dark(),
        };
        if let Theme::Custom { palette, .. } = self {
            let base = color("base-100", palette.base_100)?;
            visuals.panel_fill = base;
            visuals.window_fill = base;
            visuals.extreme_bg_color = color("primary", palette.primary)?;
            visuals.faint_bg_color = color("secondary", palette.secondary)?;
            visuals.widgets.noninteractive.bg_fill = color("accent", palette.accent)?;
            visuals.widgets.inactive.bg_fill = color("neutral", palette.neutral)?;
            visuals.selection.bg_fill = color("info", palette.info)?;
            visuals.hyperlink_color = color("success", palette.success)?;
            visuals.warn_fg_color = color("warning", palette.warning)?;
            visuals.error_fg_color = color("error", palette.error)?;
        }
        Ok(visuals)
    }

    pub fn apply(&self, ctx: &Context) -> Result<(), ThemeError> {
        ctx.set_visuals(self.visuals()?);
        Ok(())
    }
}

fn color(role: &'static str, value: &'static str) -> Result<Color32, ThemeError> {
    parse_hex(value).ok_or(ThemeError::BadColor { role, value })
}

/// Parses `#rrggbb`.
pub fn parse_hex(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_themes_in_order() {
        let names: Vec<_> = THEMES.iter().map(Theme::name).collect();
        assert_eq!(
            names,
            ["light", "dark", "black", "cupcake", "emerald", "retro", "cyberpunk", "synthwave", "valentine", "halloween"]
        );
    }

    #[test]
    fn finds_by_name() {
        assert_eq!(find("Retro").unwrap().name(), "retro");
        assert_eq!(find("nope"), Err(ThemeError::Unknown("nope".to_string())));
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#ff5724"), Some(Color32::from_rgb(0xff, 0x57, 0x24)));
        assert_eq!(parse_hex("ff5724"), None);
        assert_eq!(parse_hex("#ff57"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn black_palette_overrides_dark_visuals() {
        let visuals = find("black").unwrap().visuals().unwrap();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, Color32::from_rgb(0, 0, 0));
        assert_eq!(visuals.selection.bg_fill, Color32::from_rgb(0x20, 0x94, 0xf3));
        assert_eq!(visuals.error_fg_color, Color32::from_rgb(0xff, 0x57, 0x24));
    }

    #[test]
    fn built_ins_follow_their_scheme() {
        assert!(!find("cupcake").unwrap().visuals().unwrap().dark_mode);
        assert!(find("halloween").unwrap().visuals().unwrap().dark_mode);
    }

    #[test]
    fn malformed_palette_is_rejected() {
        let theme = Theme::Custom {
            name: "broken",
            scheme: Scheme::Dark,
            palette: Palette { warning: "#ff99", ..BLACK },
        };
        assert_eq!(theme.visuals().unwrap_err(), ThemeError::BadColor { role: "warning", value: "#ff99" });
    }
}
