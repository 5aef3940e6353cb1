pub(crate) mod sidebar;
