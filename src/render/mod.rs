//! PDF rendering for composed payslip plans
//!
//! This module takes a [`DocumentPlan`](crate::compose::DocumentPlan) and
//! produces the printable A4 document through the genpdf layout engine.

pub mod config;
mod error;
pub mod fonts;
mod pdf;

pub use config::PageConfig;
pub use error::RenderError;
pub use pdf::{build_document, render_to_file};
