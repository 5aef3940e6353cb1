/// UI events emitted by the sidebar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    ToggleRequested,
    RouteSelected { path: String },
}
