use super::state::DialogState;

pub(crate) const HELP_MESSAGE: &str =
    "Helpline: Call +1-800-HR-HELP or email support@company.com";
pub(crate) const CONFIRM_LOGOUT_MESSAGE: &str =
    "Are you sure you want to logout?";
pub(crate) const LOGOUT_NOTICE_MESSAGE: &str = "Logging out...";

pub(crate) const HELP_TITLE: &str = "Help & Support";
pub(crate) const LOGOUT_TITLE: &str = "Logout";

/// Button set rendered under the prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogButtons {
    /// A single OK button.
    Acknowledge,
    /// Cancel and Confirm buttons.
    ConfirmCancel,
}

/// Read-only snapshot of the visible prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DialogViewModel {
    pub(crate) title: &'static str,
    pub(crate) message: &'static str,
    pub(crate) buttons: DialogButtons,
}

impl DialogViewModel {
    /// Return the prompt for `state`, or `None` while idle.
    pub(crate) fn from_state(state: DialogState) -> Option<Self> {
        let (title, message, buttons) = match state {
            DialogState::Idle => return None,
            DialogState::Help => {
                (HELP_TITLE, HELP_MESSAGE, DialogButtons::Acknowledge)
            },
            DialogState::ConfirmLogout => (
                LOGOUT_TITLE,
                CONFIRM_LOGOUT_MESSAGE,
                DialogButtons::ConfirmCancel,
            ),
            DialogState::LogoutNotice => (
                LOGOUT_TITLE,
                LOGOUT_NOTICE_MESSAGE,
                DialogButtons::Acknowledge,
            ),
        };

        Some(Self {
            title,
            message,
            buttons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CONFIRM_LOGOUT_MESSAGE, DialogButtons, DialogViewModel, HELP_MESSAGE,
    };
    use crate::widgets::dialog::state::DialogState;

    #[test]
    fn given_idle_state_when_building_view_model_then_nothing_is_rendered() {
        assert_eq!(DialogViewModel::from_state(DialogState::Idle), None);
    }

    #[test]
    fn given_help_state_when_building_view_model_then_helpline_is_acknowledged()
    {
        let vm = DialogViewModel::from_state(DialogState::Help)
            .expect("help prompt");

        assert_eq!(vm.message, HELP_MESSAGE);
        assert_eq!(vm.buttons, DialogButtons::Acknowledge);
    }

    #[test]
    fn given_confirm_state_when_building_view_model_then_both_choices_exist() {
        let vm = DialogViewModel::from_state(DialogState::ConfirmLogout)
            .expect("confirm prompt");

        assert_eq!(vm.message, CONFIRM_LOGOUT_MESSAGE);
        assert_eq!(vm.buttons, DialogButtons::ConfirmCancel);
    }
}
