/// Intent events for the modal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogIntent {
    ShowHelp,
    RequestLogout,
    Confirm,
    Cancel,
    Acknowledge,
}

/// Effect events produced by the dialog reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogEffect {
    /// The user confirmed the logout prompt.
    LogoutConfirmed,
}

/// Dialog event stream routed through the app update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogEvent {
    Intent(DialogIntent),
    Effect(DialogEffect),
}
