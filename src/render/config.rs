//! Configuration for PDF page output

use std::path::PathBuf;

/// Page geometry and type sizes for the rendered payslip
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page margins in millimetres (top, right, bottom, left)
    pub margins: (f64, f64, f64, f64),

    /// Base type size in points
    pub base_font_size: u8,

    /// Type size for the company name and net pay banner
    pub banner_font_size: u8,

    /// Type size for the confidential notice and footer
    pub small_font_size: u8,

    /// Vertical gap between blocks, in text lines
    pub section_gap: f64,

    /// Directory searched first for the TrueType font family
    pub fonts_dir: Option<PathBuf>,

    /// Preferred font family name (file stem prefix, e.g. "LiberationSans")
    pub font_family: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            margins: (12.0, 10.0, 12.0, 10.0),
            base_font_size: 10,
            banner_font_size: 12,
            small_font_size: 8,
            section_gap: 1.0,
            fonts_dir: None,
            font_family: None,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page margins in millimetres
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margins = (top, right, bottom, left);
        self
    }

    /// Set the base type size
    pub fn with_base_font_size(mut self, size: u8) -> Self {
        self.base_font_size = size;
        self
    }

    /// Set the gap between blocks
    pub fn with_section_gap(mut self, lines: f64) -> Self {
        self.section_gap = lines;
        self
    }

    /// Set the directory searched first for fonts
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    /// Set the preferred font family name
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}
