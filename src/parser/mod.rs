//! Input parsing: source handling, CSV tokenizing and type inference

pub mod csv_line;
pub mod infer;

use crate::error::{ConvertError, ConvertResult};
use std::io::Read;
use std::path::PathBuf;

/// Where the input text comes from.
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Raw text passed directly on the command line or via the API
    Literal(String),
    /// Single input file path
    File(PathBuf),
    /// Directory containing multiple input files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl TextSource {
    /// Read the full input text from this source.
    pub fn read(&self) -> ConvertResult<String> {
        match self {
            TextSource::Literal(content) => Ok(content.clone()),
            TextSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| ConvertError::io(e.to_string(), Some(path.clone()))),
            TextSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            TextSource::Directory(path) => Err(ConvertError::io(
                "cannot read a directory as a single document",
                Some(path.clone()),
            )),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            TextSource::Literal(_) => "string input".to_string(),
            TextSource::File(path) => format!("file: {}", path.display()),
            TextSource::Directory(path) => format!("directory: {}", path.display()),
            TextSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            TextSource::Literal(_) | TextSource::Stdin => true,
            TextSource::File(path) => path.is_file(),
            TextSource::Directory(path) => path.is_dir(),
        }
    }

    /// Get the estimated size of the source in bytes (if known)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            TextSource::Literal(s) => Some(s.len() as u64),
            TextSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            TextSource::Directory(_) | TextSource::Stdin => None,
        }
    }

    /// Check if this source represents a single document (vs many files)
    pub fn is_single_document(&self) -> bool {
        !matches!(self, TextSource::Directory(_))
    }
}
