mod command;
mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use command::SidebarCommand;
use dashboard_ui_sidebar::{BOTTOM_ROUTES, PRIMARY_ROUTES, SidebarLayout};
pub(crate) use event::SidebarEvent;
use model::SidebarViewModel;
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Sidebar widget owning the open/closed state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Build the sidebar collapsed.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce a command into state updates and collaborator calls.
    pub(crate) fn reduce(
        &mut self,
        command: SidebarCommand,
        ctx: &mut SidebarCtx<'_>,
    ) {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Build a read-only view model for the frame drawn at `now`.
    pub(crate) fn vm<'a>(
        &self,
        now: Instant,
        current_path: Option<&'a str>,
    ) -> SidebarViewModel<'a> {
        SidebarViewModel {
            is_opened: self.state.is_opened(),
            layout: SidebarLayout::at(self.state.progress(now)),
            current_path,
            primary_routes: &PRIMARY_ROUTES,
            bottom_routes: &BOTTOM_ROUTES,
        }
    }

    /// Return whether the sidebar is expanded.
    pub(crate) fn is_opened(&self) -> bool {
        self.state.is_opened()
    }

    /// Return whether the collapse/expand transition is still running.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }
}
