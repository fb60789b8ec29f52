//! Theme support for payslip rendering
//!
//! This module provides symbolic color tokens that can be resolved to
//! concrete values via theme files, plus font family preferences. Themes
//! keep brand styling out of the layout code so the same payslip can be
//! rendered under different house styles.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

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

/// A theme mapping symbolic color tokens to concrete values, plus font
/// preferences for the PDF layout engine
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
    /// Preferred TrueType family name (file stem prefix)
    pub font_family: Option<String>,
    /// Directory searched first for the font family
    pub font_dir: Option<PathBuf>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    fonts: Option<TomlFonts>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlFonts {
    family: Option<String>,
    dir: Option<PathBuf>,
}

/// Default palette - black on white like the reference payslip
const DEFAULT_PALETTE: &str = r##"
[colors]
# Body text and figures
text = "#000000"

# Section headings, column totals, and the net pay banner
heading = "#000000"

# Confidential notice and footer
muted = "#444444"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            font_family: parsed.fonts.as_ref().and_then(|f| f.family.clone()),
            font_dir: parsed.fonts.as_ref().and_then(|f| f.dir.clone()),
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the default palette,
    /// then to black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        "#000000".to_string()
    }

    /// RGB components of a token for the PDF style layer
    ///
    /// An unparseable value falls back to black rather than failing the
    /// whole document.
    pub fn rgb(&self, token: &str) -> (u8, u8, u8) {
        let value = self.resolve_or_default(token);
        match parse_hex(&value) {
            Some(rgb) => rgb,
            None => {
                log::warn!("theme color '{token}' = '{value}' is not a hex color; using black");
                (0, 0, 0)
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

/// Parse "#rgb" or "#rrggbb" into components
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
