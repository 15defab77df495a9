use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dialog::{DialogEvent, DialogIntent};
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent, SidebarIntent};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = app.sidebar_ctx();
    app.widgets
        .sidebar
        .reduce(event, &ctx)
        .map(AppEvent::Sidebar)
}

fn route_effect(app: &mut App, effect: SidebarEffect) -> Task<AppEvent> {
    log::debug!("sidebar effect: {effect:?}");

    match effect {
        SidebarEffect::SetActiveSection(section) => {
            if !app.state.set_active_section(section) {
                return Task::none();
            }
            Task::done(AppEvent::Sidebar(SidebarEvent::Intent(
                SidebarIntent::ActiveSectionChanged(section),
            )))
        },
        SidebarEffect::SetOpen(is_open) => {
            app.state.sidebar_open = is_open;
            Task::none()
        },
        SidebarEffect::ShowHelp => dialog_intent(DialogIntent::ShowHelp),
        SidebarEffect::RequestLogout => {
            dialog_intent(DialogIntent::RequestLogout)
        },
    }
}

fn dialog_intent(intent: DialogIntent) -> Task<AppEvent> {
    Task::done(AppEvent::Dialog(DialogEvent::Intent(intent)))
}
