/// Intent events emitted by the section page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionIntent {
    /// Narrow-layout menu button pressed while the sidebar is closed.
    OpenSidebar,
}
