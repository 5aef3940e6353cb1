use std::time::Instant;

use super::command::SidebarCommand;
use super::state::SidebarState;
use crate::navigation::Navigator;

/// Runtime context dependencies for the sidebar reducer.
pub(crate) struct SidebarCtx<'a> {
    /// Collaborator that receives selected route paths.
    pub(crate) navigator: &'a mut dyn Navigator,
    /// Clock reading the transition starts from.
    pub(crate) now: Instant,
}

/// Reduce a sidebar command into state updates and navigation calls.
pub(crate) fn reduce(
    state: &mut SidebarState,
    command: SidebarCommand,
    ctx: &mut SidebarCtx<'_>,
) {
    match command {
        SidebarCommand::Toggle => state.toggle(ctx.now),
        SidebarCommand::SelectRoute { path } => ctx.navigator.navigate(&path),
    }
}
