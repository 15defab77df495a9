use crate::menu::SectionId;

/// Intent events emitted by sidebar views or forwarded by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarIntent {
    /// Accordion header pressed.
    ParentPressed(SectionId),
    /// Parentless top-level entry pressed.
    EntryPressed(SectionId),
    /// Child of an expanded parent pressed.
    ChildPressed(SectionId),
    /// The caller's active section changed.
    ActiveSectionChanged(SectionId),
    ToggleOpen,
    ClosePressed,
    BackdropPressed,
    HelpPressed,
    LogoutPressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// Caller should make `SectionId` the active section.
    SetActiveSection(SectionId),
    /// Caller should switch the sidebar display mode.
    SetOpen(bool),
    ShowHelp,
    RequestLogout,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
