use std::time::Instant;

use dashboard_ui_sidebar::toggle_animation;
use iced::Animation;

const COLLAPSED_PROGRESS: f32 = 0.0;
const EXPANDED_PROGRESS: f32 = 1.0;

/// Internal sidebar state: the open flag animated between its two values.
#[derive(Debug)]
pub(super) struct SidebarState {
    opened: Animation<bool>,
}

impl SidebarState {
    pub(super) fn is_opened(&self) -> bool {
        self.opened.value()
    }

    /// Transition progress at `now`, `0.0` collapsed to `1.0` expanded.
    pub(super) fn progress(&self, now: Instant) -> f32 {
        self.opened
            .interpolate(COLLAPSED_PROGRESS, EXPANDED_PROGRESS, now)
    }

    pub(super) fn is_animating(&self, now: Instant) -> bool {
        self.opened.is_animating(now)
    }

    pub(super) fn toggle(&mut self, now: Instant) {
        let opened = !self.opened.value();
        self.opened.go_mut(opened, now);
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            opened: toggle_animation(false),
        }
    }
}
