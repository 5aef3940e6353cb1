use dashboard_ui_sidebar::{
    PaletteOverrides, SidebarPalette, SidebarTheme, ThemeError, ThemeKind,
};
use serde::{Deserialize, Serialize};

/// Persisted settings payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SettingsData {
    theme: ThemeKind,
    palette: PaletteOverrides,
}

impl SettingsData {
    pub(crate) fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    pub(crate) fn palette(&self) -> &PaletteOverrides {
        &self.palette
    }

    /// Build the sidebar theme, applying palette overrides over the
    /// selected theme's defaults.
    pub(crate) fn sidebar_theme(&self) -> Result<SidebarTheme, ThemeError> {
        if self.palette.is_empty() {
            return Ok(SidebarTheme::new(self.theme));
        }

        let palette =
            SidebarPalette::for_kind(self.theme).with_overrides(&self.palette);
        SidebarTheme::from_palette(self.theme, palette)
    }
}
