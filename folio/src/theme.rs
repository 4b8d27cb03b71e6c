use iced::theme::Palette;
use iced::{Color, Theme};

use crate::config::ThemeVariant;

/// Hex color palette of a page theme.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) surface_raised: String,
    pub(crate) foreground: String,
    pub(crate) bright_foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) faint_foreground: String,
    pub(crate) accent: String,
    pub(crate) bright_accent: String,
    pub(crate) dim_accent: String,
    pub(crate) deep_accent: String,
    pub(crate) border: String,
    pub(crate) success: String,
    pub(crate) danger: String,
    pub(crate) warning: String,
    pub(crate) overlay: String,
}

impl ColorPalette {
    /// Black page with red accents.
    pub(crate) fn crimson() -> Self {
        Self {
            background: String::from("#000000"),
            surface: String::from("#111827"),
            surface_raised: String::from("#1F2937"),
            foreground: String::from("#D1D5DB"),
            bright_foreground: String::from("#FFFFFF"),
            dim_foreground: String::from("#9CA3AF"),
            faint_foreground: String::from("#4B5563"),
            accent: String::from("#EF4444"),
            bright_accent: String::from("#F87171"),
            dim_accent: String::from("#7F1D1D"),
            deep_accent: String::from("#450A0A"),
            border: String::from("#1F2937"),
            success: String::from("#22C55E"),
            danger: String::from("#DC2626"),
            warning: String::from("#EAB308"),
            overlay: String::from("#0B0B0F"),
        }
    }

    /// Slate page with indigo accents.
    pub(crate) fn indigo() -> Self {
        Self {
            background: String::from("#020617"),
            surface: String::from("#0F172A"),
            surface_raised: String::from("#1E293B"),
            foreground: String::from("#CBD5E1"),
            bright_foreground: String::from("#F8FAFC"),
            dim_foreground: String::from("#94A3B8"),
            faint_foreground: String::from("#475569"),
            accent: String::from("#6366F1"),
            bright_accent: String::from("#818CF8"),
            dim_accent: String::from("#312E81"),
            deep_accent: String::from("#1E1B4B"),
            border: String::from("#1E293B"),
            success: String::from("#22C55E"),
            danger: String::from("#EF4444"),
            warning: String::from("#EAB308"),
            overlay: String::from("#070B1A"),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::crimson()
    }
}

/// Parsed palette used by the view layer.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_raised: Color,
    pub(crate) foreground: Color,
    pub(crate) bright_foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) faint_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) bright_accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) deep_accent: Color,
    pub(crate) border: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            surface_raised: parse_hex_color(&p.surface_raised),
            foreground: parse_hex_color(&p.foreground),
            bright_foreground: parse_hex_color(&p.bright_foreground),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            faint_foreground: parse_hex_color(&p.faint_foreground),
            accent: parse_hex_color(&p.accent),
            bright_accent: parse_hex_color(&p.bright_accent),
            dim_accent: parse_hex_color(&p.dim_accent),
            deep_accent: parse_hex_color(&p.deep_accent),
            border: parse_hex_color(&p.border),
            success: parse_hex_color(&p.success),
            danger: parse_hex_color(&p.danger),
            warning: parse_hex_color(&p.warning),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse a `#RRGGBB` string. Malformed values render as magenta so they
/// stand out instead of aborting the window.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        log::warn!("invalid palette color {value}");
        Color::from_rgb8(0xFF, 0x00, 0xFF)
    })
}

/// Return `color` with its alpha channel replaced.
pub(crate) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Optional overrides for component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
    pub(crate) border_radius: Option<f32>,
}

/// Page theme shared by every panel.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_variant(ThemeVariant::default())
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
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build the theme for a configured variant.
    pub(crate) fn from_variant(variant: ThemeVariant) -> Self {
        let raw_palette = match variant {
            ThemeVariant::Crimson => ColorPalette::crimson(),
            ThemeVariant::Indigo => ColorPalette::indigo(),
        };

        Self {
            id: String::from(variant.id()),
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Panel -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Holds the page theme chosen at startup.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(variant: ThemeVariant) -> Self {
        Self {
            current: AppTheme::from_variant(variant),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppTheme, ColorPalette, parse_hex_color, with_alpha};
    use crate::config::ThemeVariant;
    use iced::Color;

    #[test]
    fn given_builtin_palettes_when_parsed_then_no_color_falls_back() {
        let fallback = Color::from_rgb8(0xFF, 0x00, 0xFF);
        for palette in [ColorPalette::crimson(), ColorPalette::indigo()] {
            for value in [
                &palette.background,
                &palette.surface,
                &palette.foreground,
                &palette.accent,
                &palette.overlay,
            ] {
                assert_ne!(parse_hex_color(value), fallback, "{value}");
            }
        }
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_fallback_color_is_used() {
        assert_eq!(
            parse_hex_color("not-a-color"),
            Color::from_rgb8(0xFF, 0x00, 0xFF)
        );
    }

    #[test]
    fn given_rgb_hex_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#DC143C"),
            Color::from_rgb8(0xDC, 0x14, 0x3C)
        );
    }

    #[test]
    fn given_variant_when_building_theme_then_accent_follows_variant() {
        let crimson = AppTheme::from_variant(ThemeVariant::Crimson);
        let indigo = AppTheme::from_variant(ThemeVariant::Indigo);

        assert_eq!(crimson.id(), "crimson");
        assert_eq!(indigo.id(), "indigo");
        assert_ne!(
            crimson.iced_palette().accent,
            indigo.iced_palette().accent
        );
    }

    #[test]
    fn given_alpha_out_of_range_when_applied_then_it_is_clamped() {
        assert_eq!(with_alpha(Color::WHITE, 1.5).a, 1.0);
        assert_eq!(with_alpha(Color::WHITE, 0.3).a, 0.3);
    }
}
