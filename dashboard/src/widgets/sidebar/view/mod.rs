use dashboard_ui_sidebar::{SidebarTheme, SidebarView};
use iced::Element;

use super::event::SidebarEvent;
use super::model::{SIDEBAR_BRAND, SidebarViewModel};

/// Props for rendering the sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: &'a SidebarTheme,
}

/// Render the sidebar and map its callbacks to sidebar events.
pub(crate) fn view(props: SidebarProps<'_>) -> Element<'_, SidebarEvent> {
    let vm = props.vm;

    SidebarView::new(props.theme, vm.primary_routes, vm.bottom_routes)
        .state(vm.is_opened, vm.layout)
        .brand(SIDEBAR_BRAND)
        .current_path(vm.current_path)
        .on_toggle(SidebarEvent::ToggleRequested)
        .on_select(|path| SidebarEvent::RouteSelected {
            path: path.to_string(),
        })
        .view()
}
