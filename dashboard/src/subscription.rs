use iced::{Subscription, window};

use super::{App, Event};

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    // Keep frames flowing until the last drawn frame reaches the target.
    if app.widgets.sidebar().is_animating(app.now) {
        window::frames().map(Event::Frame)
    } else {
        Subscription::none()
    }
}
