use dashboard_ui_sidebar::ThemeError;
use thiserror::Error;

/// Errors emitted while reading settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings theme is invalid: {0}")]
    Theme(#[from] ThemeError),
}
