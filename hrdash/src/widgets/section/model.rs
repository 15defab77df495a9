use crate::menu::{SectionId, breadcrumb};

/// Read-only snapshot consumed by the section page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionViewModel {
    pub(crate) title: &'static str,
    pub(crate) breadcrumb: Vec<&'static str>,
    pub(crate) show_menu_button: bool,
}

impl SectionViewModel {
    pub(crate) fn new(
        active_section: SectionId,
        sidebar_open: bool,
        is_narrow: bool,
    ) -> Self {
        let breadcrumb = breadcrumb(active_section);
        let title = breadcrumb
            .last()
            .copied()
            .unwrap_or_else(|| active_section.as_str());

        Self {
            title,
            breadcrumb,
            show_menu_button: is_narrow && !sidebar_open,
        }
    }
}
