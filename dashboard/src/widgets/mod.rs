pub(crate) mod sidebar;

/// Root container for widget slices.
pub(crate) struct Widgets {
    sidebar: sidebar::SidebarWidget,
}

impl Widgets {
    pub(crate) fn new() -> Self {
        Self {
            sidebar: sidebar::SidebarWidget::new(),
        }
    }

    /// Return read-only access to sidebar widget state and queries.
    pub(crate) fn sidebar(&self) -> &sidebar::SidebarWidget {
        &self.sidebar
    }

    /// Return mutable access for routing sidebar events.
    pub(crate) fn sidebar_mut(&mut self) -> &mut sidebar::SidebarWidget {
        &mut self.sidebar
    }
}
