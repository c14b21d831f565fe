//! saba-tools - asset helper utilities
//!
//! Two independent conversions used when preparing model and texture
//! assets:
//!
//! - **bin2h**: turn any binary file into a C header declaring its bytes as
//!   `static const uint8_t <name>_data[]`, so the data can be compiled in.
//! - **unzip-sjis**: extract a zip archive whose entry names were written in
//!   Shift_JIS (cp932) but read by zip tooling as cp437, restoring the real
//!   names on disk.
//!
//! ## Example
//!
//! ```no_run
//! use saba_tools::cli::{convert_file, extract_archive, Bin2hOptions, UnzipOptions};
//! use std::path::Path;
//!
//! // Writes ./toon01.bmp.h declaring toon01_bmp_data
//! convert_file(Path::new("assets/toon01.bmp"), &Bin2hOptions::default()).unwrap();
//!
//! // Recreates the archive tree under the current directory
//! extract_archive(Path::new("model.zip"), &UnzipOptions::default()).unwrap();
//! ```

pub mod array;
pub mod cli;
pub mod codepage;
pub mod entry;
pub mod error;

pub use array::{parse_array_literal, render_header, ByteArray};
pub use codepage::{recode, Codepage};
pub use error::{Result, ToolError};
