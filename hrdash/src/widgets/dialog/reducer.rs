use iced::Task;

use super::event::{DialogEffect, DialogEvent, DialogIntent};
use super::state::DialogState;

/// Reduce a dialog intent into the next prompt and an optional effect.
pub(crate) fn reduce(
    state: &mut DialogState,
    intent: DialogIntent,
) -> Task<DialogEvent> {
    let (next, effect) = transition(*state, intent);
    *state = next;

    match effect {
        Some(effect) => Task::done(DialogEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Pure transition table; unlisted pairs keep the current state.
pub(super) fn transition(
    state: DialogState,
    intent: DialogIntent,
) -> (DialogState, Option<DialogEffect>) {
    use DialogIntent::{Acknowledge, Cancel, Confirm, RequestLogout, ShowHelp};
    use DialogState::{ConfirmLogout, Help, Idle, LogoutNotice};

    match (state, intent) {
        (Idle, ShowHelp) => (Help, None),
        (Idle, RequestLogout) => (ConfirmLogout, None),
        (ConfirmLogout, Confirm) => {
            (LogoutNotice, Some(DialogEffect::LogoutConfirmed))
        },
        (ConfirmLogout, Cancel) => (Idle, None),
        (Help | LogoutNotice, Acknowledge) => (Idle, None),
        (state, _) => (state, None),
    }
}

#[cfg(test)]
mod tests {
    use super::transition;
    use crate::widgets::dialog::event::{DialogEffect, DialogIntent};
    use crate::widgets::dialog::state::DialogState;

    #[test]
    fn given_confirm_prompt_when_confirmed_then_notice_shows_and_logout_is_emitted()
     {
        let (state, effect) =
            transition(DialogState::Idle, DialogIntent::RequestLogout);
        assert_eq!(state, DialogState::ConfirmLogout);
        assert_eq!(effect, None);

        let (state, effect) = transition(state, DialogIntent::Confirm);
        assert_eq!(state, DialogState::LogoutNotice);
        assert_eq!(effect, Some(DialogEffect::LogoutConfirmed));

        let (state, effect) = transition(state, DialogIntent::Acknowledge);
        assert_eq!(state, DialogState::Idle);
        assert_eq!(effect, None);
    }

    #[test]
    fn given_confirm_prompt_when_cancelled_then_idle_without_effect() {
        let (state, effect) =
            transition(DialogState::ConfirmLogout, DialogIntent::Cancel);

        assert_eq!(state, DialogState::Idle);
        assert_eq!(effect, None);
    }

    #[test]
    fn given_help_prompt_when_acknowledged_then_idle() {
        let (state, _) = transition(DialogState::Idle, DialogIntent::ShowHelp);
        assert_eq!(state, DialogState::Help);

        let (state, effect) = transition(state, DialogIntent::Acknowledge);
        assert_eq!(state, DialogState::Idle);
        assert_eq!(effect, None);
    }

    #[test]
    fn given_open_prompt_when_other_prompt_requested_then_state_is_unchanged() {
        let cases = [
            (DialogState::Help, DialogIntent::RequestLogout),
            (DialogState::Help, DialogIntent::Confirm),
            (DialogState::ConfirmLogout, DialogIntent::ShowHelp),
            (DialogState::ConfirmLogout, DialogIntent::Acknowledge),
            (DialogState::LogoutNotice, DialogIntent::Cancel),
            (DialogState::Idle, DialogIntent::Confirm),
            (DialogState::Idle, DialogIntent::Acknowledge),
        ];

        for (state, intent) in cases {
            assert_eq!(transition(state, intent), (state, None));
        }
    }
}
