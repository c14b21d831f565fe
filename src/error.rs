use crate::codepage::Codepage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path {} has no file name", .0.display())]
    MissingFileName(PathBuf),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: Box<ToolError>,
    },

    #[error("Text {text:?} cannot be encoded as {codepage}")]
    Unencodable { codepage: Codepage, text: String },

    #[error("Bytes [{bytes}] are not valid {codepage}")]
    Undecodable { codepage: Codepage, bytes: String },

    #[error("Entry path {0:?} has no extractable components")]
    UnsafeEntryPath(String),

    #[error("Unknown codepage: {0}")]
    UnknownCodepage(String),

    #[error("Invalid array literal: {0}")]
    InvalidLiteral(String),
}

impl ToolError {
    pub(crate) fn in_entry(self, index: usize) -> Self {
        ToolError::Entry {
            index,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
