//! Collapsible navigation sidebar for [`iced`] dashboards.
//!
//! The crate is split into UI-agnostic pieces and one view builder:
//! - the static route table ([`Route`], [`PRIMARY_ROUTES`], [`BOTTOM_ROUTES`]);
//! - theme tokens resolved per selector and interaction state
//!   ([`ThemeKind`], [`ThemeToken`], [`SidebarTheme`]);
//! - the collapse/expand geometry ([`SidebarLayout`]) and its eased
//!   [`iced::Animation`] ([`toggle_animation`]);
//! - [`SidebarView`], which renders one frame from the above.
//!
//! The host owns the open/closed flag and the current location. A typical
//! update loop:
//! 1. keep a [`toggle_animation`] next to the flag and call `go_mut` on
//!    toggle;
//! 2. feed [`SidebarLayout::at`] of `interpolate(0.0, 1.0, now)` into
//!    [`SidebarView::state`];
//! 3. forward [`SidebarView::on_select`] paths to the navigation layer and
//!    pass its location back through [`SidebarView::current_path`].
//!
//! # Quick Example
//!
//! ```no_run
//! use dashboard_ui_sidebar::{
//!     BOTTOM_ROUTES, PRIMARY_ROUTES, SidebarLayout, SidebarTheme,
//!     SidebarView, ThemeKind,
//! };
//! use iced::Element;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Toggle,
//!     Select(&'static str),
//! }
//!
//! struct State {
//!     theme: SidebarTheme,
//!     opened: bool,
//!     location: String,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     SidebarView::new(&state.theme, &PRIMARY_ROUTES, &BOTTOM_ROUTES)
//!         .state(state.opened, SidebarLayout::resting(state.opened))
//!         .brand("TensorFlow")
//!         .current_path(Some(state.location.as_str()))
//!         .on_toggle(Message::Toggle)
//!         .on_select(Message::Select)
//!         .view()
//! }
//!
//! let state = State {
//!     theme: SidebarTheme::new(ThemeKind::Dark),
//!     opened: false,
//!     location: String::from("/sales"),
//! };
//! let _ = view(&state);
//! ```

pub mod icons;
mod layout;
mod motion;
mod route;
mod theme;
mod view;

pub use layout::{
    COLLAPSED_WIDTH, EXPANDED_WIDTH, SidebarLayout, TOGGLE_OVERHANG,
};
pub use motion::{
    CubicBezier, EASE, TRANSITION_DURATION, ease, toggle_animation,
};
pub use route::{
    BOTTOM_ROUTES, PRIMARY_ROUTES, ROOT_PATH, Route, RouteGroup, all_routes,
    declared_start_path, find_by_path,
};
pub use theme::{
    Interaction, PaletteOverrides, SidebarPalette, SidebarTheme, ThemeError,
    ThemeKind, ThemeToken, parse_hex_color,
};
pub use view::SidebarView;
