use iced::Size;

use crate::layout::LayoutMode;
use crate::menu::SectionId;

/// Caller-owned navigation state shared with the sidebar through context.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    pub(crate) active_section: SectionId,
    pub(crate) sidebar_open: bool,
}

impl State {
    pub(crate) fn new(
        window_size: Size,
        active_section: SectionId,
        sidebar_open: bool,
    ) -> Self {
        Self {
            window_size,
            active_section,
            sidebar_open,
        }
    }

    pub(crate) fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_width(self.window_size.width)
    }

    /// Store a new active section and report whether it changed.
    pub(crate) fn set_active_section(&mut self, section: SectionId) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }
}
