mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{DialogEffect, DialogEvent, DialogIntent};
use iced::Task;
use model::DialogViewModel;
use state::DialogState;

/// Modal prompt widget for the help and logout actions.
pub(crate) struct DialogWidget {
    state: DialogState,
}

impl DialogWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: DialogState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: DialogIntent) -> Task<DialogEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return the visible prompt, if any.
    pub(crate) fn vm(&self) -> Option<DialogViewModel> {
        DialogViewModel::from_state(self.state)
    }

    /// Return whether a prompt currently blocks the rest of the UI.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
