mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use model::SidebarViewModel;
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::menu::SectionId;

/// Navigation sidebar owning the accordion state.
///
/// The active section and the open/closed display mode belong to the
/// caller and arrive through [`SidebarCtx`].
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Mount the sidebar, expanding the parent of `active_section`.
    pub(crate) fn new(active_section: SectionId) -> Self {
        let mut state = SidebarState::default();
        state.sync_active_section(active_section);
        Self { state }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self, ctx: &SidebarCtx) -> SidebarViewModel {
        SidebarViewModel {
            active_section: ctx.active_section,
            open_parent: self.state.open_parent(),
            is_open: ctx.is_open,
            is_narrow: ctx.is_narrow,
        }
    }

    /// Return the currently expanded parent, if any.
    #[cfg(test)]
    pub(crate) fn open_parent(&self) -> Option<SectionId> {
        self.state.open_parent()
    }
}
