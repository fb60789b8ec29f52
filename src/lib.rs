//! Payslip Generator - renders employee payslips from JSON payloads
//!
//! This library is a single linear pipeline: parse the JSON payload, compose
//! the fixed sequence of layout blocks, and render it through the genpdf
//! page-layout engine into a one-page A4 PDF.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let json = std::fs::read_to_string("payslip.json").unwrap();
//! payslip_gen::generate(&json, Path::new("payslip.pdf")).unwrap();
//! ```

pub mod compose;
pub mod payload;
pub mod render;
pub mod theme;

pub use compose::{compose, ComposeError, ComposeOptions, DocumentPlan};
pub use payload::{parse, PayloadError, Payslip};
pub use render::{PageConfig, RenderError};
pub use theme::Theme;

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error while deserializing the payload
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Error while composing the block plan
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),

    /// Error while rendering or writing the document
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Page geometry and type sizes
    pub page: PageConfig,
    /// Composition options (footer generation date)
    pub compose: ComposeOptions,
    /// Theme for colors and font preferences
    pub theme: Theme,
    /// Debug mode: print the composed block plan to stderr
    pub debug: bool,
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page configuration
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }

    /// Set the composition options
    pub fn with_compose(mut self, options: ComposeOptions) -> Self {
        self.compose = options;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Generate a payslip PDF with default configuration
///
/// This is the main entry point for the library. It parses the payload,
/// composes the block plan, and writes the rendered document to `output`.
/// On failure nothing is written.
pub fn generate(json: &str, output: &Path) -> Result<(), GenerateError> {
    generate_with_config(json, output, GenerateConfig::default())
}

/// Generate a payslip PDF with custom configuration
pub fn generate_with_config(
    json: &str,
    output: &Path,
    config: GenerateConfig,
) -> Result<(), GenerateError> {
    let slip = payload::parse(json)?;
    log::debug!("parsed payload for employee '{}'", slip.employee.name);

    let plan = compose::compose(&slip, &config.compose)?;

    if config.debug {
        eprintln!("=== Block Plan ===");
        eprintln!("{}", plan.outline());
        eprintln!("==================");
    }

    render::render_to_file(&plan, output, &config.page, &config.theme)?;
    log::info!("payslip written to {}", output.display());
    Ok(())
}
