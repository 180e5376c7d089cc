//! Design-token theme for gallery output
//!
//! This module provides symbolic spacing and color tokens that resolve to
//! concrete CSS values. The float component itself treats offsets as
//! opaque and passes them through untouched; resolution happens when
//! markup is serialized, standing in for the host framework's theming
//! engine.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A theme mapping symbolic tokens to concrete CSS values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Spacing tokens: name -> CSS length
    pub spaces: HashMap<String, String>,
    /// Color tokens: name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    spaces: HashMap<String, String>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default token scale - rem-based spacing steps and a blue accent palette
const DEFAULT_THEME: &str = r##"
[spaces]
3xs = "0.125rem"
2xs = "0.25rem"
xs = "0.5rem"
sm = "0.75rem"
md = "1rem"
lg = "1.5rem"
xl = "2rem"
2xl = "3rem"
3xl = "4rem"

[colors]
primary = "#2196f3"
primary-contrast = "#ffffff"
surface = "#f5f5f5"
outline = "#e0e0e0"
text = "#333333"
"##;

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            spaces: parsed.spaces,
            colors: parsed.colors,
        })
    }

    /// Look up a spacing token
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn space(&self, token: &str) -> Option<&str> {
        self.spaces.get(token).map(|s| s.as_str())
    }

    /// Look up a color token
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a style value against the spacing scale
    ///
    /// Values that are not spacing tokens are assumed to already be
    /// concrete CSS and pass through verbatim.
    pub fn resolve_space(&self, value: &str) -> String {
        match self.space(value) {
            Some(length) => length.to_string(),
            None => value.to_string(),
        }
    }

    /// Resolve a style value against the color palette, passing unknown
    /// values through verbatim
    pub fn resolve_color(&self, value: &str) -> String {
        match self.color(value) {
            Some(color) => color.to_string(),
            None => value.to_string(),
        }
    }

    /// Color tokens in sorted order, for deterministic output
    pub fn sorted_colors(&self) -> Vec<(&str, &str)> {
        let mut tokens: Vec<_> = self
            .colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        tokens.sort();
        tokens
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_str(DEFAULT_THEME).expect("Default theme should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert!(theme.spaces.contains_key("md"));
        assert!(theme.spaces.contains_key("3xs"));
        assert!(theme.colors.contains_key("primary"));
    }

    #[test]
    fn test_space_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.space("md"), Some("1rem"));
        assert_eq!(theme.space("nonexistent"), None);
    }

    #[test]
    fn test_resolve_space_passthrough() {
        let theme = Theme::default();
        // Tokens resolve, concrete values pass through
        assert_eq!(theme.resolve_space("md"), "1rem");
        assert_eq!(theme.resolve_space("4px"), "4px");
        assert_eq!(theme.resolve_space("auto"), "auto");
        assert_eq!(theme.resolve_space("50% -50%"), "50% -50%");
    }

    #[test]
    fn test_resolve_color_passthrough() {
        let theme = Theme::default();
        assert_eq!(theme.resolve_color("primary"), "#2196f3");
        assert_eq!(theme.resolve_color("#abcdef"), "#abcdef");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Test Theme"
description = "A test theme"

[spaces]
md = "8px"
"##;
        let theme = Theme::from_str(toml_str).expect("Should parse");
        assert_eq!(theme.name, Some("Test Theme".to_string()));
        assert_eq!(theme.description, Some("A test theme".to_string()));
        assert_eq!(theme.space("md"), Some("8px"));
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r##"
[colors]
primary = "#111111"
"##;
        let theme = Theme::from_str(toml_str).expect("Should parse");
        assert_eq!(theme.name, None);
        assert_eq!(theme.color("primary"), Some("#111111"));
        assert!(theme.spaces.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Theme::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_sorted_colors_are_ordered() {
        let theme = Theme::default();
        let tokens = theme.sorted_colors();
        let names: Vec<_> = tokens.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
