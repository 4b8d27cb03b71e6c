use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 16.0,
        }
    }
}

/// Heading font configuration.
#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) display_size: f32,
    pub(crate) title_size: f32,
    pub(crate) card_size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            display_size: 56.0,
            title_size: 36.0,
            card_size: 22.0,
        }
    }
}

/// Combined font configuration for body text and headings.
#[derive(Debug, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
    pub(crate) mono: Font,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            ui: UiFonts::default(),
            heading: HeadingFonts::default(),
            mono: Font::MONOSPACE,
        }
    }
}

impl FontsConfig {
    /// Scale heading sizes down for narrow windows.
    pub(crate) fn for_narrow_viewport(mut self) -> Self {
        self.heading.display_size = 40.0;
        self.heading.title_size = 30.0;
        self
    }
}
