use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a settings load result from explicit parts.
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_settings(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

/// Parse and validate a settings payload.
pub(crate) fn parse_settings(data: &str) -> Result<SettingsData, SettingsError> {
    let settings = serde_json::from_str::<SettingsData>(data)?;
    settings.sidebar_theme()?;
    Ok(settings)
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("dashboard")
            .join("settings.json");
    }

    std::env::temp_dir().join("dashboard").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use dashboard_ui_sidebar::ThemeKind;

    use super::{
        SettingsData, SettingsLoadStatus, load_settings_from_path,
        parse_settings,
    };
    use crate::settings::errors::SettingsError;

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_settings_from_path(&path)
            .expect("missing settings should not fail");
        let (settings, status) = loaded.into_parts();

        assert_eq!(status, SettingsLoadStatus::Missing);
        assert_eq!(settings, SettingsData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_settings_are_loaded() {
        let root = test_temp_dir("valid");
        let path = root.join("settings.json");
        fs::write(
            &path,
            r##"{ "theme": "dark", "palette": { "text_hover": "#ABCDEF" } }"##,
        )
        .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("valid settings should load");
        let (settings, status) = loaded.into_parts();

        assert_eq!(status, SettingsLoadStatus::Loaded);
        assert_eq!(settings.theme(), ThemeKind::Dark);
        assert_eq!(
            settings.palette().text_hover.as_deref(),
            Some("#ABCDEF")
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (settings, status) = loaded.into_parts();

        assert_eq!(settings, SettingsData::default());
        match status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_theme_when_load_then_returns_invalid_status() {
        let root = test_temp_dir("unknown_theme");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "theme": "solarized" }"#)
            .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("unknown theme should not fail with io error");
        let (settings, status) = loaded.into_parts();

        assert_eq!(settings, SettingsData::default());
        match status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(message.contains("solarized"), "{message}");
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_color_when_parse_then_theme_error_is_returned() {
        let result =
            parse_settings(r##"{ "palette": { "text_hover": "#12" } }"##);

        assert!(matches!(result, Err(SettingsError::Theme(_))));
    }

    #[test]
    fn given_directory_path_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        let result = load_settings_from_path(&root);

        assert!(matches!(result, Err(SettingsError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "dashboard-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
