use crate::array::{array_identifier, write_header};
use crate::error::{Result, ToolError};
use std::fs::{self, File};
use std::ffi::{OsStr, OsString};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for the bin2h conversion
#[derive(Debug, Clone)]
pub struct Bin2hOptions {
    /// Directory the `.h` file is written to
    pub output_dir: PathBuf,
}

impl Default for Bin2hOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct Bin2hReport {
    pub output: PathBuf,
    pub identifier: String,
    pub bytes: usize,
}

/// `<output_dir>/<base name of input>.h`
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    Ok(output_dir.join(header_name(base_name(input)?)))
}

fn base_name(input: &Path) -> Result<&OsStr> {
    input
        .file_name()
        .ok_or_else(|| ToolError::MissingFileName(input.to_path_buf()))
}

fn header_name(file_name: &OsStr) -> OsString {
    let mut name = file_name.to_os_string();
    name.push(".h");
    name
}

/// Convert a binary file into a C header declaring its bytes
/// Overwrites an existing header of the same name
pub fn convert_file(input: &Path, options: &Bin2hOptions) -> Result<Bin2hReport> {
    let data = fs::read(input).map_err(|source| ToolError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let file_name = base_name(input)?;
    let output = options.output_dir.join(header_name(file_name));
    let identifier = array_identifier(&file_name.to_string_lossy());
    debug!(input = %input.display(), bytes = data.len(), %identifier, "read input");

    let write_err = |source| ToolError::WriteOutput {
        path: output.clone(),
        source,
    };
    let file = File::create(&output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    match write_header(&mut writer, &identifier, &data) {
        Ok(()) => {}
        Err(ToolError::Io(source)) => return Err(write_err(source)),
        Err(e) => return Err(e),
    }
    writer.flush().map_err(write_err)?;

    info!(output = %output.display(), bytes = data.len(), "wrote header");
    Ok(Bin2hReport {
        output,
        identifier,
        bytes: data.len(),
    })
}
