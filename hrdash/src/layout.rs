use iced::Size;

/// Viewport widths below this value use the narrow (mobile) layout.
pub(crate) const NARROW_LAYOUT_BREAKPOINT: f32 = 1024.0;

pub(crate) const DEFAULT_WINDOW_SIZE: Size = Size::new(1280.0, 800.0);
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Layout family derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LayoutMode {
    /// Sidebar floats over the content and hides when closed.
    Narrow,
    /// Sidebar sits beside the content and collapses to an icon rail.
    Wide,
}

impl LayoutMode {
    pub(crate) fn from_width(width: f32) -> Self {
        if width < NARROW_LAYOUT_BREAKPOINT {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub(crate) fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }
}
