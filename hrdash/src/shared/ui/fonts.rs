use iced::Font;
use iced::font::Weight;

/// Body font configuration for labels and dialog text.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Heading font configuration for brand and section titles.
#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 20.0,
        }
    }
}

/// Combined font configuration for the dashboard UI.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}

impl FontsConfig {
    /// Semibold variant of the body font used for active rows.
    pub(crate) fn ui_emphasis(&self) -> Font {
        Font {
            weight: Weight::Semibold,
            ..self.ui.font_type
        }
    }
}
