use dashboard_ui_sidebar::{
    Interaction, SidebarTheme, ThemeKind, ThemeToken, parse_hex_color,
};
use iced::theme::Palette;
use iced::{Color, Theme};

/// Page surface colors drawn behind the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageColors {
    background: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl PageColors {
    fn for_kind(kind: ThemeKind) -> Self {
        let hex = match kind {
            ThemeKind::Light => ["#EEF1F6", "#16A34A", "#D97706", "#DC2626"],
            ThemeKind::Dark => ["#0F1115", "#98C379", "#E5C07B", "#E06C75"],
        };
        let [background, success, warning, danger] =
            hex.map(|value| parse_hex_color(value).unwrap_or(Color::BLACK));

        Self {
            background,
            success,
            warning,
            danger,
        }
    }
}

/// Owns the sidebar theme and derives the window theme from it.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    sidebar: SidebarTheme,
    page: PageColors,
}

impl ThemeManager {
    pub(crate) fn new(sidebar: SidebarTheme) -> Self {
        let page = PageColors::for_kind(sidebar.kind());
        Self { sidebar, page }
    }

    pub(crate) fn sidebar(&self) -> &SidebarTheme {
        &self.sidebar
    }

    pub(crate) fn kind(&self) -> ThemeKind {
        self.sidebar.kind()
    }

    /// Convert the current theme into an iced theme.
    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = Palette {
            background: self.page.background,
            text: self.sidebar.token(ThemeToken::Text(Interaction::Hover)),
            primary: self
                .sidebar
                .token(ThemeToken::ButtonBackground(Interaction::Active)),
            success: self.page.success,
            warning: self.page.warning,
            danger: self.page.danger,
        };

        Theme::custom(format!("dashboard-{}", self.kind()), palette)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(SidebarTheme::default())
    }
}
