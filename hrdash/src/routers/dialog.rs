use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dialog::{DialogEffect, DialogEvent, DialogIntent};

/// Route a dialog event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: DialogEvent) -> Task<AppEvent> {
    match event {
        DialogEvent::Intent(event) => route_intent(app, event),
        DialogEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: DialogIntent) -> Task<AppEvent> {
    app.widgets.dialog.reduce(event).map(AppEvent::Dialog)
}

fn route_effect(effect: DialogEffect) -> Task<AppEvent> {
    match effect {
        DialogEffect::LogoutConfirmed => {
            log::info!("logout confirmed, ending session");
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::route;
    use crate::app::App;
    use crate::config::ResolvedConfig;
    use crate::widgets::dialog::{DialogEvent, DialogIntent};

    fn intent(intent: DialogIntent) -> DialogEvent {
        DialogEvent::Intent(intent)
    }

    #[test]
    fn given_help_request_when_routed_then_dialog_opens_until_acknowledged() {
        let mut app =
            App::from_config(ResolvedConfig::default(), Size::new(1280.0, 800.0));

        let _ = route(&mut app, intent(DialogIntent::ShowHelp));
        assert!(app.widgets.dialog.is_open());

        let _ = route(&mut app, intent(DialogIntent::Acknowledge));
        assert!(!app.widgets.dialog.is_open());
    }
}
