//! Settings schema structs

use serde::{Deserialize, Serialize};

/// Editor display preferences
///
/// Every field has a default so a partial settings file loads cleanly;
/// unknown keys are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Editor font size in pixels
    pub font_size: u32,
    /// Spaces per indentation level
    pub tab_size: u32,
    /// Show line numbers in the gutter
    pub line_numbers: bool,
    /// Soft-wrap long lines
    pub word_wrap: bool,
    /// Color theme identifier
    pub theme: String,
    /// Editor font family
    pub font_family: String,
    /// Show the minimap strip
    pub minimap: bool,
    /// Editor content padding in pixels
    pub padding: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: 14,
            tab_size: 4,
            line_numbers: true,
            word_wrap: false,
            theme: "aurora-dark".into(),
            font_family: "JetBrains Mono".into(),
            minimap: true,
            padding: 16,
        }
    }
}
