use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use super::{App, Event};
use crate::navigation::Navigator;
use crate::widgets::sidebar::{self, view::SidebarProps};

const PAGE_PADDING: f32 = 20.0;
const PAGE_TITLE_SIZE: f32 = 28.0;
const PAGE_PATH_SIZE: f32 = 14.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let current_path = app.navigator.current_path();
    let sidebar_vm = app.widgets.sidebar().vm(app.now, current_path);

    let sidebar = sidebar::view::view(SidebarProps {
        vm: sidebar_vm,
        theme: app.theme_manager.sidebar(),
    })
    .map(Event::Sidebar);

    row![inset(sidebar), view_page(app, current_path)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Sidebar slot with a uniform gap to the window edges.
fn inset<'a, Message: 'a>(
    content: Element<'a, Message, Theme, iced::Renderer>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    container(content)
        .padding(PAGE_PADDING)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(
    app: &'a App,
    current_path: Option<&'a str>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let content = column![
        text(app.page_title()).size(PAGE_TITLE_SIZE),
        text(current_path.unwrap_or_default()).size(PAGE_PATH_SIZE),
    ]
    .spacing(8);

    container(content)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
