/// Container width while collapsed (icons only).
pub const COLLAPSED_WIDTH: f32 = 72.0;
/// Container width while expanded (icons and labels).
pub const EXPANDED_WIDTH: f32 = 256.0;
/// Horizontal distance the toggle may reach past the container edge.
pub const TOGGLE_OVERHANG: f32 = 32.0;
pub const TOGGLE_SIZE: f32 = 24.0;
pub const TOGGLE_TOP: f32 = 30.0;

const COLLAPSED_TOGGLE_OFFSET: f32 = -32.0;
const EXPANDED_TOGGLE_OFFSET: f32 = -10.0;
const EXPANDED_TOGGLE_ROTATION: f32 = -180.0;
const EXPANDED_ITEM_LABEL_GAP: f32 = 12.0;
const EXPANDED_LOGO_LABEL_GAP: f32 = 6.0;

/// Geometry of the sidebar for one point of the collapse/expand transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarLayout {
    /// Container width.
    pub width: f32,
    /// Toggle position relative to the container's right edge; negative
    /// values place it outside the container.
    pub toggle_offset: f32,
    /// Toggle glyph rotation in degrees.
    pub toggle_rotation: f32,
    /// Opacity of the brand and menu labels.
    pub label_opacity: f32,
    /// Gap between a menu icon and its label.
    pub item_label_gap: f32,
    /// Gap between the logo and the brand label.
    pub logo_label_gap: f32,
}

impl SidebarLayout {
    pub const COLLAPSED: SidebarLayout = SidebarLayout {
        width: COLLAPSED_WIDTH,
        toggle_offset: COLLAPSED_TOGGLE_OFFSET,
        toggle_rotation: 0.0,
        label_opacity: 0.0,
        item_label_gap: 0.0,
        logo_label_gap: 0.0,
    };

    pub const EXPANDED: SidebarLayout = SidebarLayout {
        width: EXPANDED_WIDTH,
        toggle_offset: EXPANDED_TOGGLE_OFFSET,
        toggle_rotation: EXPANDED_TOGGLE_ROTATION,
        label_opacity: 1.0,
        item_label_gap: EXPANDED_ITEM_LABEL_GAP,
        logo_label_gap: EXPANDED_LOGO_LABEL_GAP,
    };

    /// Resting layout for the given state.
    pub fn resting(is_opened: bool) -> Self {
        if is_opened {
            Self::EXPANDED
        } else {
            Self::COLLAPSED
        }
    }

    /// Interpolate between collapsed (`0.0`) and expanded (`1.0`).
    pub fn at(progress: f32) -> Self {
        let t = progress.clamp(0.0, 1.0);
        let (a, b) = (Self::COLLAPSED, Self::EXPANDED);

        Self {
            width: lerp(a.width, b.width, t),
            toggle_offset: lerp(a.toggle_offset, b.toggle_offset, t),
            toggle_rotation: lerp(a.toggle_rotation, b.toggle_rotation, t),
            label_opacity: lerp(a.label_opacity, b.label_opacity, t),
            item_label_gap: lerp(a.item_label_gap, b.item_label_gap, t),
            logo_label_gap: lerp(a.logo_label_gap, b.logo_label_gap, t),
        }
    }

    /// Whether labels take part in rendering at all.
    pub fn labels_visible(&self) -> bool {
        self.label_opacity > 0.0
    }

    /// Left edge of the toggle, measured from the container's left edge.
    pub fn toggle_left(&self) -> f32 {
        self.width - self.toggle_offset - TOGGLE_SIZE
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
