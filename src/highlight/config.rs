//! Configuration types and defaults for plot highlighting

use serde::{Deserialize, Serialize};

/// Maximum graphemes searched backward/forward from a hit for a sentence boundary
pub const DEFAULT_LOOKAROUND: usize = 200;

pub const DEFAULT_FADED_CLASS: &str = "sentence-faded";
pub const DEFAULT_PASSAGE_CLASS_PREFIX: &str = "sentence-highlight";
pub const DEFAULT_CHARACTER_CLASS: &str = "highlighted-character";
pub const DEFAULT_LINE_SEPARATOR: &str = "<br>";
pub const DEFAULT_EMPTY_PLOT_PLACEHOLDER: &str =
    "<p class=\"info-placeholder\">Plot summary not available for this movie.</p>";

// =============================================================================
// Errors
// =============================================================================

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidJson(String),
    InvalidClassName { field: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidJson(msg) => write!(f, "Invalid config JSON: {}", msg),
            ConfigError::InvalidClassName { field, value } => {
                write!(f, "Invalid CSS class name for {}: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HighlightConfig
// =============================================================================

/// Highlighter configuration
///
/// Class names are written into markup without escaping, so `validate()`
/// restricts them to plain CSS identifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HighlightConfig {
    #[serde(default = "default_lookaround")]
    pub lookaround: usize,
    #[serde(default = "default_faded_class")]
    pub faded_class: String,
    /// Passage spans get `<prefix>-<kind>`, e.g. `sentence-highlight-match`
    #[serde(default = "default_passage_class_prefix")]
    pub passage_class_prefix: String,
    #[serde(default = "default_character_class")]
    pub character_class: String,
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
    #[serde(default = "default_empty_plot_placeholder")]
    pub empty_plot_placeholder: String,
}

fn default_lookaround() -> usize { DEFAULT_LOOKAROUND }
fn default_faded_class() -> String { DEFAULT_FADED_CLASS.to_string() }
fn default_passage_class_prefix() -> String { DEFAULT_PASSAGE_CLASS_PREFIX.to_string() }
fn default_character_class() -> String { DEFAULT_CHARACTER_CLASS.to_string() }
fn default_line_separator() -> String { DEFAULT_LINE_SEPARATOR.to_string() }
fn default_empty_plot_placeholder() -> String { DEFAULT_EMPTY_PLOT_PLACEHOLDER.to_string() }

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            lookaround: default_lookaround(),
            faded_class: default_faded_class(),
            passage_class_prefix: default_passage_class_prefix(),
            character_class: default_character_class(),
            line_separator: default_line_separator(),
            empty_plot_placeholder: default_empty_plot_placeholder(),
        }
    }
}

impl HighlightConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HighlightConfig = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style lookaround override
    pub fn with_lookaround(mut self, lookaround: usize) -> Self {
        self.lookaround = lookaround;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_class_name("faded_class", &self.faded_class)?;
        check_class_name("passage_class_prefix", &self.passage_class_prefix)?;
        check_class_name("character_class", &self.character_class)?;
        Ok(())
    }
}

fn check_class_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid_head = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(ConfigError::InvalidClassName {
            field,
            value: value.to_string(),
        })
    }
}
