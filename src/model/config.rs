use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presentation settings read from the optional TOML config file.
/// Every key is optional; a missing file means `AppConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial window geometry in logical units, plus the title shown in the frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Default: 500
    #[serde(default = "default_width")]
    pub width: u16,
    /// Default: 600
    #[serde(default = "default_height")]
    pub height: u16,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

fn default_width() -> u16 {
    500
}

fn default_height() -> u16 {
    600
}

fn default_title() -> String {
    "To-Do List".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
