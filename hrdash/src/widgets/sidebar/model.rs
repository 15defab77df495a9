use crate::menu::{MENU_TREE, MenuEntry, MenuIcon, SectionId};

/// Sidebar width while expanded (labels visible).
pub(crate) const SIDEBAR_OPEN_WIDTH: f32 = 256.0;
/// Sidebar width while collapsed to the icon rail.
pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;

/// Read-only snapshot consumed by sidebar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarViewModel {
    pub(crate) active_section: SectionId,
    pub(crate) open_parent: Option<SectionId>,
    pub(crate) is_open: bool,
    pub(crate) is_narrow: bool,
}

impl SidebarViewModel {
    /// Width of the sidebar panel in the current display mode.
    pub(crate) fn width(&self) -> f32 {
        if self.is_open {
            SIDEBAR_OPEN_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }

    /// A closed sidebar slides off screen in the narrow layout.
    pub(crate) fn is_visible(&self) -> bool {
        self.is_open || !self.is_narrow
    }

    /// The dimmed backdrop only exists over narrow layouts.
    pub(crate) fn shows_backdrop(&self) -> bool {
        self.is_open && self.is_narrow
    }
}

/// Which handler a navigation row dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavRowKind {
    /// Accordion header with at least one child.
    Parent,
    /// Top-level entry without children.
    Entry,
    /// Child of the expanded parent.
    Child,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chevron {
    Up,
    Down,
}

/// One visible row of the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavRow {
    pub(crate) kind: NavRowKind,
    pub(crate) section: SectionId,
    pub(crate) icon: MenuIcon,
    pub(crate) label: &'static str,
    pub(crate) is_active: bool,
    pub(crate) show_label: bool,
    pub(crate) chevron: Option<Chevron>,
}

/// Flatten the menu tree into the rows visible for `vm`.
pub(crate) fn nav_rows(vm: &SidebarViewModel) -> Vec<NavRow> {
    nav_rows_in(MENU_TREE, vm)
}

pub(crate) fn nav_rows_in(
    entries: &[MenuEntry],
    vm: &SidebarViewModel,
) -> Vec<NavRow> {
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let children = entry.children();
        if children.is_empty() {
            rows.push(NavRow {
                kind: NavRowKind::Entry,
                section: entry.id(),
                icon: entry.icon(),
                label: entry.label(),
                is_active: entry.id() == vm.active_section,
                show_label: vm.is_open,
                chevron: None,
            });
            continue;
        }

        let expanded = vm.open_parent == Some(entry.id());
        let chevron = if expanded { Chevron::Up } else { Chevron::Down };

        rows.push(NavRow {
            kind: NavRowKind::Parent,
            section: entry.id(),
            icon: entry.icon(),
            label: entry.label(),
            is_active: entry.is_active(vm.active_section),
            show_label: vm.is_open,
            chevron: vm.is_open.then_some(chevron),
        });

        if !(vm.is_open && expanded) {
            continue;
        }

        rows.extend(children.iter().map(|child| NavRow {
            kind: NavRowKind::Child,
            section: child.id,
            icon: child.icon,
            label: child.label,
            is_active: child.id == vm.active_section,
            show_label: true,
            chevron: None,
        }));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::{
        Chevron, NavRowKind, SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_OPEN_WIDTH,
        SidebarViewModel, nav_rows, nav_rows_in,
    };
    use crate::menu::{MenuEntry, MenuIcon, MenuLeaf, MenuParent, SectionId};

    fn vm(
        active: &'static str,
        open_parent: Option<&'static str>,
        is_open: bool,
    ) -> SidebarViewModel {
        SidebarViewModel {
            active_section: SectionId::new(active),
            open_parent: open_parent.map(SectionId::new),
            is_open,
            is_narrow: false,
        }
    }

    #[test]
    fn given_collapsed_sidebar_when_parent_is_expanded_then_no_child_rows_are_rendered()
     {
        let rows = nav_rows(&vm("training-courses", Some("training"), false));

        assert!(rows.iter().all(|row| row.kind != NavRowKind::Child));
        let training = rows
            .iter()
            .find(|row| row.section == SectionId::new("training"))
            .expect("training row");
        assert!(!training.show_label);
        assert_eq!(training.chevron, None);
        assert!(training.is_active);
    }

    #[test]
    fn given_open_sidebar_when_parent_is_expanded_then_children_follow_parent()
    {
        let rows = nav_rows(&vm("overview", Some("payroll"), true));

        let payroll_index = rows
            .iter()
            .position(|row| row.section == SectionId::new("payroll"))
            .expect("payroll row");
        assert_eq!(rows[payroll_index].chevron, Some(Chevron::Up));

        let children: Vec<_> = rows[payroll_index + 1..]
            .iter()
            .take_while(|row| row.kind == NavRowKind::Child)
            .map(|row| row.section.as_str())
            .collect();
        assert_eq!(
            children,
            vec![
                "payroll-overview",
                "payroll-processing",
                "payroll-reports",
                "payroll-benefits",
            ]
        );
    }

    #[test]
    fn given_open_sidebar_when_nothing_is_expanded_then_parents_show_down_chevron()
     {
        let rows = nav_rows(&vm("overview", None, true));

        assert_eq!(rows.len(), 9);
        for row in rows.iter().filter(|row| row.kind == NavRowKind::Parent) {
            assert_eq!(row.chevron, Some(Chevron::Down));
            assert!(row.show_label);
        }
        let overview = &rows[0];
        assert_eq!(overview.kind, NavRowKind::Entry);
        assert!(overview.is_active);
        assert_eq!(overview.chevron, None);
    }

    #[test]
    fn given_active_child_when_flattening_then_only_child_and_parent_are_active()
    {
        let rows = nav_rows(&vm("employee-add", Some("employees"), true));

        let active: Vec<_> = rows
            .iter()
            .filter(|row| row.is_active)
            .map(|row| (row.kind, row.section.as_str()))
            .collect();
        assert_eq!(
            active,
            vec![
                (NavRowKind::Parent, "employees"),
                (NavRowKind::Child, "employee-add"),
            ]
        );
    }

    #[test]
    fn given_parent_without_children_when_flattening_then_it_renders_as_entry()
    {
        const EMPTY: &[MenuLeaf] = &[];
        const TREE: &[MenuEntry] = &[MenuEntry::Parent(MenuParent {
            id: SectionId::new("reports"),
            label: "Reports",
            icon: MenuIcon::FileText,
            children: EMPTY,
        })];

        let rows = nav_rows_in(TREE, &vm("overview", Some("reports"), true));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, NavRowKind::Entry);
        assert_eq!(rows[0].chevron, None);
    }

    #[test]
    fn given_narrow_layout_when_closed_then_sidebar_is_hidden_without_backdrop()
    {
        let mut model = vm("overview", None, false);
        model.is_narrow = true;

        assert!(!model.is_visible());
        assert!(!model.shows_backdrop());

        model.is_open = true;
        assert!(model.is_visible());
        assert!(model.shows_backdrop());
        assert_eq!(model.width(), SIDEBAR_OPEN_WIDTH);
    }

    #[test]
    fn given_wide_layout_when_collapsed_then_icon_rail_stays_visible() {
        let model = vm("overview", None, false);

        assert!(model.is_visible());
        assert!(!model.shows_backdrop());
        assert_eq!(model.width(), SIDEBAR_COLLAPSED_WIDTH);
    }
}
