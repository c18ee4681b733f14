use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::app::{Demo, DemoParams, DrawingApp};

/// Returns the path to the settings file: `~/.config/drawing-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("drawing-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Editor
    pub selected_demo: Demo,
    pub show_settings: bool,

    // Shape params
    pub params: DemoParams,

    // Display
    pub show_grid: bool,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_demo: Demo::Arc,
            show_settings: true,

            params: DemoParams::default(),

            show_grid: false,

            color_r: 30,
            color_g: 90,
            color_b: 220,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                } else {
                    log::info!("Saved settings to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &DrawingApp) -> Self {
        Self {
            selected_demo: app.selected_demo,
            show_settings: app.show_settings,

            params: app.params.clone(),

            show_grid: app.canvas.settings.show_grid,

            color_r: app.color.r(),
            color_g: app.color.g(),
            color_b: app.color.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut DrawingApp) {
        app.selected_demo = self.selected_demo;
        app.show_settings = self.show_settings;

        app.params = self.params.clone();
        app.sync_animations();

        app.canvas.settings.show_grid = self.show_grid;

        app.color = egui::Color32::from_rgb(self.color_r, self.color_g, self.color_b);

        app.shape_needs_update = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::CurveParameters;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = AppSettings::from_json(r#"{ "show_grid": true }"#).unwrap();
        assert!(settings.show_grid);
        assert_eq!(settings.selected_demo, Demo::Arc);
        assert_eq!(settings.params, DemoParams::default());
    }

    #[test]
    fn test_partial_params() {
        let json = r#"{
            "selected_demo": "Spirograph",
            "params": { "curve": { "inner_radius": 100, "outer_radius": 40, "arm_distance": 10, "winding_fraction": 0.5 } }
        }"#;
        let settings = AppSettings::from_json(json).unwrap();

        assert_eq!(settings.selected_demo, Demo::Spirograph);
        assert_eq!(settings.params.curve.outer_radius, 40);
        assert_eq!(settings.params.petal_width, DemoParams::default().petal_width);
    }

    #[test]
    fn test_partial_curve_object() {
        let json = r#"{ "params": { "curve": { "outer_radius": 40 } } }"#;
        let curve = AppSettings::from_json(json).unwrap().params.curve;
        let defaults = CurveParameters::default();

        assert_eq!(curve.outer_radius, 40);
        assert_eq!(curve.inner_radius, defaults.inner_radius);
        assert_eq!(curve.arm_distance, defaults.arm_distance);
        assert!((curve.winding_fraction - defaults.winding_fraction).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_apply_round_trip() {
        let mut app = DrawingApp::with_params(DemoParams::default());
        let mut settings = AppSettings::default();
        settings.selected_demo = Demo::CheckerBoard;
        settings.params.checker_rows = 6.0;
        settings.color_g = 200;

        settings.apply(&mut app);
        assert!(app.shape_needs_update);
        assert_eq!(AppSettings::from_app(&app), settings);
    }
}
