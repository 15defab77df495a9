/// Which prompt, if any, is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DialogState {
    #[default]
    Idle,
    Help,
    ConfirmLogout,
    LogoutNotice,
}

impl DialogState {
    pub(crate) fn is_open(self) -> bool {
        self != DialogState::Idle
    }
}
