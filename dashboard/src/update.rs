use iced::Task;

use super::{App, Event, routers};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    match event {
        Event::Sidebar(event) => routers::sidebar::route_event(app, event),
        Event::Frame(now) => {
            app.now = now;
            Task::none()
        },
    }
}
