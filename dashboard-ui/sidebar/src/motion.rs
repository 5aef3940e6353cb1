use std::time::Duration;

use iced::Animation;
use iced::animation::Easing;

/// Duration of the collapse/expand transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

const BISECTION_STEPS: usize = 24;

/// Timing curve defined by two control points, with fixed end points at
/// `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// The stylesheet `ease` timing function.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map a time fraction in `[0, 1]` to an eased progress value.
    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // x(t) is monotonic for control points inside [0, 1].
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        for _ in 0..BISECTION_STEPS {
            let mid = (low + high) * 0.5;
            if sample(self.x1, self.x2, mid) < x {
                low = mid;
            } else {
                high = mid;
            }
        }

        sample(self.y1, self.y2, (low + high) * 0.5)
    }
}

fn sample(a1: f32, a2: f32, t: f32) -> f32 {
    ((((1.0 - 3.0 * a2 + 3.0 * a1) * t) + (3.0 * a2 - 6.0 * a1)) * t
        + 3.0 * a1)
        * t
}

/// The stylesheet `ease` curve as a plain function, usable as
/// [`Easing::Custom`].
pub fn ease(x: f32) -> f32 {
    EASE.apply(x)
}

/// Collapse/expand animation of the sidebar, resting at `opened`.
///
/// Project it with [`Animation::interpolate`] between `0.0` (collapsed) and
/// `1.0` (expanded) and feed the result to [`SidebarLayout::at`].
///
/// [`SidebarLayout::at`]: crate::SidebarLayout::at
pub fn toggle_animation(opened: bool) -> Animation<bool> {
    Animation::new(opened)
        .duration(TRANSITION_DURATION)
        .easing(Easing::Custom(ease))
}
