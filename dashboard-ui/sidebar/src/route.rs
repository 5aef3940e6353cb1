/// Static descriptor of one navigation destination.
///
/// `active` is the declared highlight from the route table. Hosts should treat
/// it as a seed for the initial location only; the rendered highlight follows
/// the current location (see [`Route::is_current`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Label shown next to the icon when the sidebar is expanded.
    pub title: &'static str,
    /// Icon identifier resolved through [`crate::icons::resolve`].
    pub icon: &'static str,
    /// Destination forwarded to the navigation handler.
    pub path: &'static str,
    /// Declared highlight flag.
    pub active: bool,
}

impl Route {
    const fn new(
        title: &'static str,
        icon: &'static str,
        path: &'static str,
        active: bool,
    ) -> Self {
        Self {
            title,
            icon,
            path,
            active,
        }
    }

    /// Return whether this route is the given current location.
    pub fn is_current(&self, current_path: Option<&str>) -> bool {
        current_path == Some(self.path)
    }
}

/// Primary navigation entries, top of the sidebar.
pub const PRIMARY_ROUTES: [Route; 6] = [
    Route::new("Home", "fas-solid fa-house", "/", false),
    Route::new("Sales", "chart-line", "/sales", true),
    Route::new("Costs", "chart-column", "/costs", false),
    Route::new("Payments", "wallet", "/payments", false),
    Route::new("Finances", "chart-pie", "/finances", false),
    Route::new("Messages", "envelope", "/messages", false),
];

/// Utility entries pinned to the bottom of the sidebar.
pub const BOTTOM_ROUTES: [Route; 2] = [
    Route::new("Settings", "sliders", "/settings", false),
    Route::new("Support", "phone-volume", "/support", false),
];

/// Location used when no route declares itself active.
pub const ROOT_PATH: &str = "/";

/// The two menu lists rendered by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Primary,
    Bottom,
}

impl RouteGroup {
    /// Both groups in render order.
    pub const ALL: [RouteGroup; 2] = [RouteGroup::Primary, RouteGroup::Bottom];

    /// Return the routes of this group in declared order.
    pub fn routes(self) -> &'static [Route] {
        match self {
            RouteGroup::Primary => &PRIMARY_ROUTES,
            RouteGroup::Bottom => &BOTTOM_ROUTES,
        }
    }
}

/// Iterate over every route, primary list first.
pub fn all_routes() -> impl Iterator<Item = &'static Route> {
    RouteGroup::ALL
        .into_iter()
        .flat_map(|group| group.routes().iter())
}

/// Find the route registered for `path`.
pub fn find_by_path(path: &str) -> Option<&'static Route> {
    all_routes().find(|route| route.path == path)
}

/// Return the first route flagged active in the table, or the root path.
pub fn declared_start_path() -> &'static str {
    all_routes()
        .find(|route| route.active)
        .map(|route| route.path)
        .unwrap_or(ROOT_PATH)
}
