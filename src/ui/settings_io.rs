use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use crate::ui::settings::UiSettings;

const SETTINGS_FILE: &str = "ui_settings.json";

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prest-board")
        .join(SETTINGS_FILE)
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    let path = settings_path();
    if let Err(e) = save_settings_to(&path, settings) {
        warn!(path = %path.display(), error = ?e, "could not save ui settings");
    }
}

/// Reads settings from `path`. A missing file gives the defaults quietly,
/// an unreadable one gives them with a warning. Values are clamped.
pub fn load_settings_from(path: &Path) -> UiSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return UiSettings::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read ui settings");
            return UiSettings::default();
        }
    };

    match serde_json::from_str::<UiSettings>(&raw) {
        Ok(settings) => settings.clamped(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed ui settings");
            UiSettings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).context("encoding ui settings")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), "ui settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("prest-board-ui-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("nested").join(SETTINGS_FILE)
    }

    #[test]
    fn saved_settings_load_back() {
        let path = scratch_file("roundtrip");
        let settings = UiSettings {
            ui_scale: 1.5,
            drag_sensitivity: 20.0,
            undo_limit: Some(10),
            log_level: "debug".into(),
            storage_dir: Some(PathBuf::from("/tmp/boards")),
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn missing_or_malformed_file_gives_defaults() {
        let path = scratch_file("fallback");
        assert_eq!(load_settings_from(&path), UiSettings::default());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ ui_scale: ").unwrap();
        assert_eq!(load_settings_from(&path), UiSettings::default());
    }

    #[test]
    fn hand_edited_values_are_clamped_on_load() {
        let path = scratch_file("clamp");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "ui_scale": 9.0, "drag_sensitivity": 0.5 }"#).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.ui_scale, 2.0);
        assert_eq!(loaded.drag_sensitivity, 5.0);
    }
}
