use crate::menu::{SectionId, parent_of};

/// Accordion state: at most one parent is expanded.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    open_parent: Option<SectionId>,
}

impl SidebarState {
    pub(super) fn open_parent(&self) -> Option<SectionId> {
        self.open_parent
    }

    /// Collapse `parent` if it is expanded, otherwise expand it alone.
    pub(super) fn toggle_parent(&mut self, parent: SectionId) {
        self.open_parent = if self.open_parent == Some(parent) {
            None
        } else {
            Some(parent)
        };
    }

    /// Expand the parent owning `active_section`.
    ///
    /// Leaves the accordion untouched when no parent owns the section.
    pub(super) fn sync_active_section(&mut self, active_section: SectionId) {
        if let Some(parent) = parent_of(active_section) {
            self.open_parent = Some(parent.id);
        }
    }
}
