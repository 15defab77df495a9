pub(crate) mod dialog;
pub(crate) mod section;
pub(crate) mod sidebar;
