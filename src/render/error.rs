//! Error types for PDF rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing the document
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable TrueType family was found in any searched directory
    #[error("no TrueType font family found (searched: {searched:?})")]
    FontsNotFound { searched: Vec<PathBuf> },

    /// A font file exists but could not be read
    #[error("failed to read font '{}': {source}", path.display())]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A font file was rejected by the layout library
    #[error("failed to load font '{}': {source}", path.display())]
    FontData {
        path: PathBuf,
        source: genpdf::error::Error,
    },

    /// Document assembly or output failure
    #[error("failed to render document: {0}")]
    Document(#[from] genpdf::error::Error),
}
