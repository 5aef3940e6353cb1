use dashboard_ui_sidebar::{Route, SidebarLayout};

/// Label rendered next to the sidebar logo.
pub(crate) const SIDEBAR_BRAND: &str = "TensorFlow";

/// Read-only view model for sidebar rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) is_opened: bool,
    /// Geometry to draw now, possibly mid-transition.
    pub(crate) layout: SidebarLayout,
    pub(crate) current_path: Option<&'a str>,
    pub(crate) primary_routes: &'static [Route],
    pub(crate) bottom_routes: &'static [Route],
}
