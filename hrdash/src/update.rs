use iced::Task;

use super::{App, AppEvent};
use crate::guards::{ModalGuard, modal_guard};
use crate::routers;

/// Apply the modal guard, then route the event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.widgets.dialog.is_open() {
        if let ModalGuard::Ignore = modal_guard(&event) {
            log::trace!("dropping event while dialog is open: {event:?}");
            return Task::none();
        }
    }

    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Dialog(event) => routers::dialog::route(app, event),
        AppEvent::Section(event) => routers::section::route(app, event),
        AppEvent::Window(event) => routers::window::route(app, event),
    }
}
