use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::section::SectionIntent;

/// Route section page intents to caller state.
pub(crate) fn route(app: &mut App, event: SectionIntent) -> Task<AppEvent> {
    match event {
        SectionIntent::OpenSidebar => {
            app.state.sidebar_open = true;
            Task::none()
        },
    }
}
