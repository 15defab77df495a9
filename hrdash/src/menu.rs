//! Static navigation tree of the dashboard.
//!
//! The tree is at most two levels deep: top-level entries are either leaves
//! or parents whose children are leaves. Depth is enforced by the types,
//! since [`MenuParent::children`] can only hold [`MenuLeaf`] values.

use std::fmt;

/// Identifier of a navigable section (a top-level entry or a child).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SectionId(&'static str);

impl SectionId {
    pub(crate) const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Section selected when nothing else is configured.
pub(crate) const DEFAULT_SECTION: SectionId = SectionId::new("overview");

/// Symbolic icon reference, resolved to an image by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuIcon {
    AlertCircle,
    Award,
    BarChart3,
    Bell,
    BookOpen,
    Briefcase,
    Calculator,
    Calendar,
    Clock,
    CreditCard,
    Database,
    DollarSign,
    FileText,
    Globe,
    GraduationCap,
    Home,
    Mail,
    Palette,
    Search,
    Settings,
    Shield,
    Target,
    TrendingUp,
    User,
    UserPlus,
    Users,
}

/// A selectable leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuLeaf {
    pub(crate) id: SectionId,
    pub(crate) label: &'static str,
    pub(crate) icon: MenuIcon,
}

/// A top-level entry grouping leaf children under an accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuParent {
    pub(crate) id: SectionId,
    pub(crate) label: &'static str,
    pub(crate) icon: MenuIcon,
    pub(crate) children: &'static [MenuLeaf],
}

impl MenuParent {
    /// Return whether `section` is one of this parent's children.
    pub(crate) fn contains(&self, section: SectionId) -> bool {
        self.children.iter().any(|child| child.id == section)
    }
}

/// A top-level node of the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Leaf(MenuLeaf),
    Parent(MenuParent),
}

impl MenuEntry {
    pub(crate) fn id(&self) -> SectionId {
        match self {
            MenuEntry::Leaf(leaf) => leaf.id,
            MenuEntry::Parent(parent) => parent.id,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            MenuEntry::Leaf(leaf) => leaf.label,
            MenuEntry::Parent(parent) => parent.label,
        }
    }

    pub(crate) fn icon(&self) -> MenuIcon {
        match self {
            MenuEntry::Leaf(leaf) => leaf.icon,
            MenuEntry::Parent(parent) => parent.icon,
        }
    }

    pub(crate) fn children(&self) -> &'static [MenuLeaf] {
        match self {
            MenuEntry::Leaf(_) => &[],
            MenuEntry::Parent(parent) => parent.children,
        }
    }

    /// Highlight rule: the entry itself or any of its children is active.
    pub(crate) fn is_active(&self, active_section: SectionId) -> bool {
        self.id() == active_section
            || self.children().iter().any(|child| child.id == active_section)
    }
}

const fn leaf(
    id: &'static str,
    label: &'static str,
    icon: MenuIcon,
) -> MenuLeaf {
    MenuLeaf {
        id: SectionId::new(id),
        label,
        icon,
    }
}

const fn parent(
    id: &'static str,
    label: &'static str,
    icon: MenuIcon,
    children: &'static [MenuLeaf],
) -> MenuEntry {
    MenuEntry::Parent(MenuParent {
        id: SectionId::new(id),
        label,
        icon,
        children,
    })
}

const EMPLOYEES_CHILDREN: &[MenuLeaf] = &[
    leaf("employee-list", "Employee List", MenuIcon::Users),
    leaf("employee-add", "Add Employee", MenuIcon::UserPlus),
    leaf("employee-reports", "Employee Reports", MenuIcon::FileText),
];

const PERFORMANCE_CHILDREN: &[MenuLeaf] = &[
    leaf("performance-overview", "Overview", MenuIcon::BarChart3),
    leaf("performance-reviews", "Reviews", MenuIcon::Award),
    leaf("performance-goals", "Goals & Targets", MenuIcon::Target),
];

const ATTENDANCE_CHILDREN: &[MenuLeaf] = &[
    leaf("attendance-overview", "Overview", MenuIcon::Calendar),
    leaf("attendance-tracking", "Time Tracking", MenuIcon::Clock),
    leaf("attendance-reports", "Reports", MenuIcon::FileText),
];

const PAYROLL_CHILDREN: &[MenuLeaf] = &[
    leaf("payroll-overview", "Overview", MenuIcon::DollarSign),
    leaf("payroll-processing", "Process Payroll", MenuIcon::Calculator),
    leaf("payroll-reports", "Payroll Reports", MenuIcon::FileText),
    leaf("payroll-benefits", "Benefits", MenuIcon::CreditCard),
];

const RECRUITMENT_CHILDREN: &[MenuLeaf] = &[
    leaf("recruitment-jobs", "Job Postings", MenuIcon::Briefcase),
    leaf("recruitment-candidates", "Candidates", MenuIcon::Search),
    leaf("recruitment-interviews", "Interviews", MenuIcon::Users),
];

const TRAINING_CHILDREN: &[MenuLeaf] = &[
    leaf("training-courses", "Courses", MenuIcon::GraduationCap),
    leaf("training-progress", "Progress", MenuIcon::BarChart3),
    leaf("training-certificates", "Certificates", MenuIcon::Award),
];

const NOTIFICATIONS_CHILDREN: &[MenuLeaf] = &[
    leaf("notifications-inbox", "Inbox", MenuIcon::Mail),
    leaf("notifications-alerts", "Alerts", MenuIcon::AlertCircle),
    leaf("notifications-settings", "Settings", MenuIcon::Settings),
];

const SETTINGS_CHILDREN: &[MenuLeaf] = &[
    leaf("settings-profile", "Profile", MenuIcon::User),
    leaf("settings-security", "Security", MenuIcon::Shield),
    leaf("settings-appearance", "Appearance", MenuIcon::Palette),
    leaf("settings-system", "System", MenuIcon::Globe),
    leaf("settings-data", "Data & Export", MenuIcon::Database),
];

pub(crate) static MENU_TREE: &[MenuEntry] = &[
    MenuEntry::Leaf(leaf("overview", "Overview", MenuIcon::Home)),
    parent("employees", "Employees", MenuIcon::Users, EMPLOYEES_CHILDREN),
    parent(
        "performance",
        "Performance",
        MenuIcon::TrendingUp,
        PERFORMANCE_CHILDREN,
    ),
    parent("attendance", "Attendance", MenuIcon::Calendar, ATTENDANCE_CHILDREN),
    parent("payroll", "Payroll", MenuIcon::DollarSign, PAYROLL_CHILDREN),
    parent(
        "recruitment",
        "Recruitment",
        MenuIcon::UserPlus,
        RECRUITMENT_CHILDREN,
    ),
    parent("training", "Training", MenuIcon::BookOpen, TRAINING_CHILDREN),
    parent(
        "notifications",
        "Notifications",
        MenuIcon::Bell,
        NOTIFICATIONS_CHILDREN,
    ),
    parent("settings", "Settings", MenuIcon::Settings, SETTINGS_CHILDREN),
];

/// Resolve a raw id against the menu tree.
pub(crate) fn find_section(id: &str) -> Option<SectionId> {
    find_section_in(MENU_TREE, id)
}

fn find_section_in(
    entries: &[MenuEntry],
    id: &str,
) -> Option<SectionId> {
    entries.iter().find_map(|entry| {
        if entry.id().as_str() == id {
            return Some(entry.id());
        }
        entry
            .children()
            .iter()
            .find(|child| child.id.as_str() == id)
            .map(|child| child.id)
    })
}

/// First parent, in list order, whose children contain `section`.
pub(crate) fn parent_of(section: SectionId) -> Option<&'static MenuParent> {
    parent_of_in(MENU_TREE, section)
}

pub(crate) fn parent_of_in(
    entries: &[MenuEntry],
    section: SectionId,
) -> Option<&MenuParent> {
    entries.iter().find_map(|entry| match entry {
        MenuEntry::Parent(parent) if parent.contains(section) => Some(parent),
        _ => None,
    })
}

/// Labels from the top-level entry down to `section`.
pub(crate) fn breadcrumb(section: SectionId) -> Vec<&'static str> {
    for entry in MENU_TREE {
        if entry.id() == section {
            return vec![entry.label()];
        }
        if let Some(child) =
            entry.children().iter().find(|child| child.id == section)
        {
            return vec![entry.label(), child.label];
        }
    }
    Vec::new()
}
