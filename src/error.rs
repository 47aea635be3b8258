//! Error types for the conversion pipeline

use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur while converting a document or file
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The resolved input path does not exist on disk
    #[error("input file {} doesn't exist", .0.display())]
    NotFound(PathBuf),

    /// The input exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The document provider could not parse the input as SVG
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An element carried attribute markup the provider rejects
    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),

    /// The destination could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// I/O failure while serializing the rewritten document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
