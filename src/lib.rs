//! poly2path - rewrite SVG `<polygon>` elements as equivalent `<path>` elements
//!
//! This library converts every polygon in an SVG document into a path whose
//! `d` attribute draws the same outline, leaving the rest of the document
//! untouched. Axis-aligned segments collapse to the single-operand `H`/`V`
//! commands; coordinates are carried through as their original source text so
//! the output never reformats a numeric literal.
//!
//! # Example
//!
//! ```rust
//! use poly2path::convert;
//!
//! let svg = convert(r#"<svg><polygon points="0,0 10,0 10,10 0,10"/></svg>"#).unwrap();
//! assert!(svg.contains(r#"<path d="M0,0 H10 V10 H0 Z"/>"#));
//! assert!(!svg.contains("<polygon"));
//! ```

pub mod error;
pub mod path;
pub mod rewrite;

pub use error::ConvertError;
pub use path::{command_for, encode_points, PathCommand, Point};
pub use rewrite::convert;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Convert the polygons of an SVG file, writing the result to `output`,
/// or back over the input when `output` is `None`.
///
/// Both paths are resolved to canonical absolute form before use. A missing
/// input fails with [`ConvertError::NotFound`] before anything is read, and
/// a parse failure leaves the destination untouched: the whole transform
/// runs in memory before the single write.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<(), ConvertError> {
    let input = resolve_input(input)?;
    let output = match output {
        Some(path) => resolve_output(path)?,
        None => input.clone(),
    };

    let source = fs::read_to_string(&input).map_err(|source| ConvertError::Read {
        path: input.clone(),
        source,
    })?;
    let rewritten = convert(&source)?;

    debug!("writing converted document to {}", output.display());
    fs::write(&output, rewritten).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(())
}

/// Canonicalize the input path, mapping a missing file to `NotFound`.
fn resolve_input(path: &Path) -> Result<PathBuf, ConvertError> {
    path.canonicalize().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::NotFound(path.to_path_buf())
        } else {
            ConvertError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Canonicalize the output path. A destination that does not exist yet
/// resolves through its parent directory, so writing to a new file works.
fn resolve_output(path: &Path) -> Result<PathBuf, ConvertError> {
    if path.exists() {
        return path.canonicalize().map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    let file_name = match path.file_name() {
        Some(name) => name,
        None => {
            return Err(ConvertError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"),
            })
        }
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = parent.canonicalize().map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parent.join(file_name))
}
