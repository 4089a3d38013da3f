use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

use prest_board::engine::gesture::DRAG_SENSITIVITY;
use prest_board::StoreConfig;

pub const UI_SCALE_RANGE: RangeInclusive<f32> = 0.75..=2.0;
pub const DRAG_SENSITIVITY_RANGE: RangeInclusive<f32> = 5.0..=40.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Pixels of upward drag per point.
    pub drag_sensitivity: f32,

    /// Caps the undo history; unset keeps every step.
    pub undo_limit: Option<usize>,

    /// One of trace, debug, info, warn, error.
    pub log_level: String,

    /// Where the board is saved. Defaults to the platform data dir.
    pub storage_dir: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            drag_sensitivity: DRAG_SENSITIVITY,
            undo_limit: None,
            log_level: "info".into(),
            storage_dir: None,
        }
    }
}

impl UiSettings {
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            undo_limit: self.undo_limit,
        }
    }

    /// Pulls hand-edited values back into what the sliders can show.
    /// Non-finite numbers take the default.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            ui_scale: clamp_to(self.ui_scale, &UI_SCALE_RANGE, defaults.ui_scale),
            drag_sensitivity: clamp_to(
                self.drag_sensitivity,
                &DRAG_SENSITIVITY_RANGE,
                defaults.drag_sensitivity,
            ),
            ..self
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
