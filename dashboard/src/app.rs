#[path = "routers/mod.rs"]
pub(crate) mod routers;
#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::time::Instant;

use dashboard_ui_sidebar::{SidebarTheme, declared_start_path, find_by_path};
use iced::{Element, Subscription, Task, Theme};

use crate::navigation::{LocationNavigator, Navigator};
use crate::settings;
use crate::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::sidebar::SidebarEvent;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

const APP_TITLE: &str = "Dashboard";
const NOT_FOUND_TITLE: &str = "Not found";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    Sidebar(SidebarEvent),
    Frame(Instant),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    navigator: LocationNavigator,
    /// Clock reading the current frame is drawn at.
    now: Instant,
    pub(crate) widgets: Widgets,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let settings = settings::load_initial_settings();
        if !settings.palette().is_empty() {
            log::info!("applying palette overrides from settings");
        }
        let sidebar_theme = match settings.sidebar_theme() {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("sidebar palette rejected: {err}");
                SidebarTheme::new(settings.theme())
            },
        };
        log::info!("using {} theme", sidebar_theme.kind());

        let app = App {
            theme_manager: ThemeManager::new(sidebar_theme),
            navigator: LocationNavigator::new(declared_start_path()),
            now: Instant::now(),
            widgets: Widgets::new(),
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        format!("{APP_TITLE} - {}", self.page_title())
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Title of the route the navigator currently points at.
    fn page_title(&self) -> &'static str {
        self.navigator
            .current_path()
            .and_then(find_by_path)
            .map_or(NOT_FOUND_TITLE, |route| route.title)
    }
}
