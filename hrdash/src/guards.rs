use crate::app::AppEvent;

/// Determines how the event loop treats an event while a dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Ignore,
}

/// Classify an incoming event when a modal dialog is open.
pub(crate) fn modal_guard(event: &AppEvent) -> ModalGuard {
    match event {
        AppEvent::Dialog(_) | AppEvent::Window(_) => ModalGuard::Allow,
        AppEvent::Sidebar(_) | AppEvent::Section(_) => ModalGuard::Ignore,
    }
}
