/// Reducer commands for the sidebar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarCommand {
    /// Flip between collapsed and expanded.
    Toggle,
    /// Forward a route path to the navigation collaborator.
    SelectRoute { path: String },
}
