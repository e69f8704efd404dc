use ratatui::style::Color;
use tracing::warn;

use crate::model::UiConfig;

/// Parsed color theme for the window
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Focused control borders and the button under focus
    pub highlight: Color,
    /// Completed task labels and unfocused borders
    pub dim: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub border: Color,
    /// Warning dialog accent
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            border: Color::Rgb(0x7D, 0x78, 0xBF),
            warning: Color::Rgb(0xFF, 0xD7, 0x00),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Build a theme from `[ui.colors]`, falling back to defaults.
    ///
    /// Bad entries never stop the window from opening: each one is logged and
    /// the default color for that slot is kept.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                warn!(key = %key, value = %value, "ignoring invalid theme color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_fg" => theme.selection_fg = color,
                "border" => theme.border = color,
                "warning" => theme.warning = color,
                _ => warn!(key = %key, "ignoring unknown theme color"),
            }
        }

        theme
    }

    /// Border color for a control, depending on focus
    pub fn border_color(&self, focused: bool) -> Color {
        if focused { self.highlight } else { self.border }
    }
}
