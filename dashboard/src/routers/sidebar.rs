use std::time::Instant;

use iced::Task;

use crate::app::{App, Event as AppEvent};
use crate::widgets::sidebar::{SidebarCommand, SidebarCtx, SidebarEvent};

/// Route sidebar UI event into the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: SidebarEvent,
) -> Task<AppEvent> {
    let command = map_sidebar_event_to_command(event);
    log::debug!("sidebar command: {command:?}");

    app.now = Instant::now();
    let mut ctx = SidebarCtx {
        navigator: &mut app.navigator,
        now: app.now,
    };
    app.widgets.sidebar_mut().reduce(command, &mut ctx);
    log::debug!("sidebar opened: {}", app.widgets.sidebar().is_opened());

    Task::none()
}

fn map_sidebar_event_to_command(event: SidebarEvent) -> SidebarCommand {
    use crate::widgets::sidebar::{SidebarCommand as C, SidebarEvent as E};

    match event {
        E::ToggleRequested => C::Toggle,
        E::RouteSelected { path } => C::SelectRoute { path },
    }
}
