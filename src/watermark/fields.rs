//! Caption fields and render options.

use serde::{Deserialize, Serialize};

use crate::metadata::Orientation;

/// A caption value with an optional user override.
///
/// The computed value comes from normalization and is never mutated, so
/// "restore default" is always exact. The override is an explicit
/// `Option` rather than an empty-string sentinel; setting an empty string
/// through [`DisplayField::set_custom`] clears it, which keeps the
/// empty-means-default contract at the API edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    computed: String,
    custom: Option<String>,
}

impl DisplayField {
    pub fn new(computed: impl Into<String>) -> Self {
        Self {
            computed: computed.into(),
            custom: None,
        }
    }

    /// The normalized value, ignoring any override.
    pub fn computed(&self) -> &str {
        &self.computed
    }

    /// The value to display: the override when set, the computed value
    /// otherwise.
    pub fn display(&self) -> &str {
        self.custom.as_deref().unwrap_or(&self.computed)
    }

    /// Whether an override is currently set.
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Replace the displayed value. An empty string clears the override.
    pub fn set_custom(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.custom = if value.is_empty() { None } else { Some(value) };
    }

    /// Drop the override and show the computed value again.
    pub fn clear_custom(&mut self) {
        self.custom = None;
    }
}

/// Canonical caption fields for one photo.
///
/// Produced once per photo load by [`crate::metadata::normalize`]; overrides
/// are the only part mutated afterwards (by UI edit actions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkFields {
    /// Device name, shown on the left (e.g. "Xiaomi 14")
    pub device_name: DisplayField,
    /// Capture timestamp, `YYYY.MM.DD HH:mm:ss`
    pub timestamp: DisplayField,
    /// Exposure parameters (e.g. `35mm  f/2.0  1/88s  ISO400`)
    pub parameters: DisplayField,
    /// DMS coordinates (e.g. `31°58'19.92"N  118°45'24.93"E`)
    pub coordinate: DisplayField,
    /// Decides the reference canvas width
    pub orientation: Orientation,
}

/// Caller-owned toggle state driving one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Show the timestamp line
    pub show_time: bool,

    /// Show the coordinate line
    pub show_coordinates: bool,

    /// Background choice; normalized modulo the palette length, so any value
    /// resolves to a valid entry
    pub background_index: usize,

    /// Render at this pixel width instead of the reference width, scaling
    /// every dimension linearly. `None` renders at the reference width.
    #[serde(default)]
    pub target_width: Option<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_time: false,
            show_coordinates: false,
            background_index: 0,
            target_width: None,
        }
    }
}

impl RenderOptions {
    /// Whether either optional line is shown, selecting the taller canvas
    /// and the expanded icon/divider geometry.
    pub fn expanded(&self) -> bool {
        self.show_time || self.show_coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test: override replaces the display value without touching the
    // computed one
    #[test]
    fn test_override_precedence() {
        let mut field = DisplayField::new("2024.11.04 15:36:08");
        assert_eq!(field.display(), "2024.11.04 15:36:08");
        assert!(!field.has_custom());

        field.set_custom("2020.01.01 00:00:00");
        assert_eq!(field.display(), "2020.01.01 00:00:00");
        assert_eq!(field.computed(), "2024.11.04 15:36:08");
        assert!(field.has_custom());
    }

    #[test]
    fn test_empty_string_clears_override() {
        let mut field = DisplayField::new("computed");
        field.set_custom("custom");
        field.set_custom("");
        assert!(!field.has_custom());
        assert_eq!(field.display(), "computed");
    }

    #[test]
    fn test_clear_restores_exact_computed_value() {
        let mut field = DisplayField::new("computed");
        field.set_custom("custom");
        field.clear_custom();
        assert_eq!(field.display(), "computed");
        assert!(!field.has_custom());
    }

    #[test]
    fn test_options_expanded() {
        let mut options = RenderOptions::default();
        assert!(!options.expanded());

        options.show_time = true;
        assert!(options.expanded());

        options.show_time = false;
        options.show_coordinates = true;
        assert!(options.expanded());
    }

    #[test]
    fn test_options_default() {
        let options = RenderOptions::default();
        assert!(!options.show_time);
        assert!(!options.show_coordinates);
        assert_eq!(options.background_index, 0);
        assert!(options.target_width.is_none());
    }
}
