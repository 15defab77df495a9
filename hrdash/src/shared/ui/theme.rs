use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Alpha applied to the backdrop color behind overlays.
pub(crate) const BACKDROP_ALPHA: f32 = 0.5;

/// User-facing palette, stored as hex strings so it can live in settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) foreground: String,
    pub(crate) muted_foreground: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) accent_strong: String,
    pub(crate) accent_soft: String,
    pub(crate) accent_border: String,
    pub(crate) header_tint: String,
    pub(crate) success: String,
    pub(crate) success_soft: String,
    pub(crate) danger: String,
    pub(crate) danger_soft: String,
    pub(crate) backdrop: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#F9FAFB"),
            surface: String::from("#FFFFFF"),
            foreground: String::from("#111827"),
            muted_foreground: String::from("#4B5563"),
            border: String::from("#E5E7EB"),
            accent: String::from("#2563EB"),
            accent_strong: String::from("#1D4ED8"),
            accent_soft: String::from("#EFF6FF"),
            accent_border: String::from("#DBEAFE"),
            header_tint: String::from("#EEF2FF"),
            success: String::from("#15803D"),
            success_soft: String::from("#F0FDF4"),
            danger: String::from("#B91C1C"),
            danger_soft: String::from("#FEF2F2"),
            backdrop: String::from("#000000"),
        }
    }
}

impl ColorPalette {
    /// Return `(field, value)` pairs for every palette entry.
    pub(crate) fn entries(&self) -> [(&'static str, &str); 15] {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("foreground", &self.foreground),
            ("muted_foreground", &self.muted_foreground),
            ("border", &self.border),
            ("accent", &self.accent),
            ("accent_strong", &self.accent_strong),
            ("accent_soft", &self.accent_soft),
            ("accent_border", &self.accent_border),
            ("header_tint", &self.header_tint),
            ("success", &self.success),
            ("success_soft", &self.success_soft),
            ("danger", &self.danger),
            ("danger_soft", &self.danger_soft),
            ("backdrop", &self.backdrop),
        ]
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) accent_strong: Color,
    pub(crate) accent_soft: Color,
    pub(crate) accent_border: Color,
    pub(crate) header_tint: Color,
    pub(crate) success: Color,
    pub(crate) success_soft: Color,
    pub(crate) danger: Color,
    pub(crate) danger_soft: Color,
    pub(crate) backdrop: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = ColorPalette::default();
        let color = |value: &str, default: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(default))
                .unwrap_or(Color::BLACK)
        };

        Self {
            background: color(&p.background, &fallback.background),
            surface: color(&p.surface, &fallback.surface),
            foreground: color(&p.foreground, &fallback.foreground),
            muted_foreground: color(
                &p.muted_foreground,
                &fallback.muted_foreground,
            ),
            border: color(&p.border, &fallback.border),
            accent: color(&p.accent, &fallback.accent),
            accent_strong: color(&p.accent_strong, &fallback.accent_strong),
            accent_soft: color(&p.accent_soft, &fallback.accent_soft),
            accent_border: color(&p.accent_border, &fallback.accent_border),
            header_tint: color(&p.header_tint, &fallback.header_tint),
            success: color(&p.success, &fallback.success),
            success_soft: color(&p.success_soft, &fallback.success_soft),
            danger: color(&p.danger, &fallback.danger),
            danger_soft: color(&p.danger_soft, &fallback.danger_soft),
            backdrop: color(&p.backdrop, &fallback.backdrop),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
    let r = channel(0).ok()?;
    let g = channel(2).ok()?;
    let b = channel(4).ok()?;
    let a = if hex.len() == 8 { channel(6).ok()? } else { 255 };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.accent_strong,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a custom palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette.
    pub(crate) fn set_custom_palette(&mut self, palette: &ColorPalette) {
        self.current = AppTheme::from_palette(String::from("custom"), palette);
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_rgb_hex_when_parsed_then_color_is_opaque() {
        let color = parse_hex_color("#2563EB").expect("valid color");

        assert_eq!(color, Color::from_rgb8(0x25, 0x63, 0xEB));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#00000080").expect("valid color");

        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_values_when_parsed_then_none_is_returned() {
        assert!(parse_hex_color("2563EB").is_none());
        assert!(parse_hex_color("#2563E").is_none());
        assert!(parse_hex_color("#GG63EB").is_none());
        assert!(parse_hex_color("#ÄÄ63EB").is_none());
    }

    #[test]
    fn given_invalid_palette_entry_when_converted_then_default_color_is_used() {
        let palette = ColorPalette {
            accent: String::from("blue"),
            ..ColorPalette::default()
        };

        let iced_palette = IcedColorPalette::from(&palette);

        assert_eq!(iced_palette.accent, Color::from_rgb8(0x25, 0x63, 0xEB));
    }
}
