mod errors;
mod model;
mod storage;

use dashboard_ui_sidebar::ThemeKind;
pub(crate) use model::SettingsData;
use storage::{SettingsLoadStatus, load_settings};

/// Environment variable that overrides the configured theme selector.
pub(crate) const THEME_ENV_VAR: &str = "DASHBOARD_THEME";

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> SettingsData {
    let mut data = match load_settings() {
        Ok(load) => {
            let (data, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => log::debug!("settings loaded"),
                SettingsLoadStatus::Missing => {
                    log::debug!("settings file missing, using defaults")
                },
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!("settings file invalid: {message}")
                },
            }
            data
        },
        Err(err) => {
            log::warn!("settings read failed: {err}");
            SettingsData::default()
        },
    };

    if let Ok(value) = std::env::var(THEME_ENV_VAR) {
        apply_theme_override(&mut data, &value);
    }

    data
}

fn apply_theme_override(data: &mut SettingsData, value: &str) {
    match value.parse::<ThemeKind>() {
        Ok(theme) => data.set_theme(theme),
        Err(err) => log::warn!("{THEME_ENV_VAR} ignored: {err}"),
    }
}
