//! TrueType font discovery for the PDF layout engine
//!
//! genpdf embeds a regular/bold/italic/bold-italic family from disk. The
//! payslip itself only uses the regular and bold faces, so missing variants
//! fall back to the closest face that does exist (DejaVu, for instance,
//! names its italics "Oblique").

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};

use super::RenderError;

/// Directories searched for a usable sans family, in order
const SYSTEM_FONT_DIRS: &[&str] = &[
    "fonts",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
];

/// Families tried in each directory
const FAMILY_CANDIDATES: &[&str] = &["LiberationSans", "DejaVuSans", "Roboto", "Arial"];

/// File suffix synonyms per face: regular, bold, italic, bold italic
const VARIANT_SUFFIXES: [&[&str]; 4] = [
    &["Regular"],
    &["Bold"],
    &["Italic", "Oblique"],
    &["BoldItalic", "BoldOblique"],
];

/// Locate and load a font family.
///
/// `explicit_dir` and `family_hint` (from the CLI or theme) are tried before
/// the built-in search list. A family counts as present when its regular
/// face exists.
pub fn load_family(
    explicit_dir: Option<&Path>,
    family_hint: Option<&str>,
) -> Result<FontFamily<FontData>, RenderError> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    if let Some(dir) = explicit_dir {
        dirs.push(dir.to_path_buf());
    }
    dirs.extend(SYSTEM_FONT_DIRS.iter().map(|dir| PathBuf::from(*dir)));

    let mut families: Vec<&str> = Vec::new();
    if let Some(hint) = family_hint {
        families.push(hint);
    }
    families.extend(FAMILY_CANDIDATES.iter().copied());

    let mut searched = Vec::new();
    for dir in &dirs {
        if dir.is_dir() {
            for family in &families {
                if let Some(found) = try_family(dir, family)? {
                    log::debug!("using font family '{}' from {}", family, dir.display());
                    return Ok(found);
                }
            }
        }
        searched.push(dir.clone());
    }

    Err(RenderError::FontsNotFound { searched })
}

/// Load a family from one directory, or None if its regular face is absent
fn try_family(dir: &Path, family: &str) -> Result<Option<FontFamily<FontData>>, RenderError> {
    let regular = match find_variant(dir, family, VARIANT_SUFFIXES[0]) {
        Some(path) => load_font(&path)?,
        None => return Ok(None),
    };
    let bold = load_or(dir, family, VARIANT_SUFFIXES[1], &regular)?;
    let italic = load_or(dir, family, VARIANT_SUFFIXES[2], &regular)?;
    let bold_italic = load_or(dir, family, VARIANT_SUFFIXES[3], &bold)?;

    Ok(Some(FontFamily {
        regular,
        bold,
        italic,
        bold_italic,
    }))
}

fn load_or(
    dir: &Path,
    family: &str,
    suffixes: &[&str],
    fallback: &FontData,
) -> Result<FontData, RenderError> {
    match find_variant(dir, family, suffixes) {
        Some(path) => load_font(&path),
        None => {
            log::debug!(
                "font face {family}-{} missing in {}; reusing another face",
                suffixes[0],
                dir.display()
            );
            Ok(fallback.clone())
        }
    }
}

fn find_variant(dir: &Path, family: &str, suffixes: &[&str]) -> Option<PathBuf> {
    suffixes
        .iter()
        .map(|suffix| dir.join(format!("{family}-{suffix}.ttf")))
        .find(|path| path.is_file())
}

fn load_font(path: &Path) -> Result<FontData, RenderError> {
    let bytes = fs::read(path).map_err(|source| RenderError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    FontData::new(bytes, None).map_err(|source| RenderError::FontData {
        path: path.to_path_buf(),
        source,
    })
}
