use iced::{Size, Task, window};

use crate::app::{App, AppEvent};

/// Track window geometry that drives the layout mode.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            handle_resize(app, size)
        },
        _ => Task::none(),
    }
}

fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    let previous = app.state.layout_mode();
    app.state.window_size = size;
    let current = app.state.layout_mode();

    if previous != current {
        log::debug!("layout mode changed: {previous:?} -> {current:?}");
    }

    Task::none()
}
