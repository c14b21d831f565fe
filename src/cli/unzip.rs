use crate::codepage::{correct_entry_name, Codepage};
use crate::entry::{sanitize_entry_path, ExtractedEntry};
use crate::error::{Result, ToolError};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::ZipArchive;

/// Options for archive extraction
#[derive(Debug, Clone)]
pub struct UnzipOptions {
    /// Directory the archive tree is recreated under
    pub output_dir: PathBuf,
    /// Encoding the entry names were really written in
    pub source: Codepage,
}

impl Default for UnzipOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            source: Codepage::Cp932,
        }
    }
}

/// Entries written by an extraction, in central directory order
#[derive(Debug, Clone, Default)]
pub struct UnzipReport {
    pub entries: Vec<ExtractedEntry>,
}

/// Extract every entry of a zip archive, decoding names under `options.source`
///
/// Names are decoded strictly; an entry whose name is not valid in the
/// source encoding stops the extraction. Directory entries that reduce to
/// the output root (`./`) are skipped. Entries extracted before a failure
/// are left on disk. Existing files are overwritten.
pub fn extract_archive(archive_path: &Path, options: &UnzipOptions) -> Result<UnzipReport> {
    let file = File::open(archive_path).map_err(|source| ToolError::ReadInput {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    debug!(archive = %archive_path.display(), entries = archive.len(), "opened archive");

    let mut report = UnzipReport::default();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let is_dir = entry.is_dir();

        let name = correct_entry_name(entry.name(), entry.name_raw(), options.source)
            .map_err(|e| e.in_entry(index))?;
        debug!(index, stored = entry.name(), corrected = %name, "extracting entry");

        let relative = match sanitize_entry_path(&name) {
            Some(relative) => relative,
            None if is_dir => {
                debug!(index, "directory entry is the output root");
                continue;
            }
            None => return Err(ToolError::UnsafeEntryPath(name).in_entry(index)),
        };
        let target = options.output_dir.join(&relative);

        write_entry(&mut entry, &target, is_dir).map_err(|e| e.in_entry(index))?;

        report.entries.push(ExtractedEntry {
            index,
            path: relative,
            is_dir,
        });
    }

    info!(archive = %archive_path.display(), entries = report.entries.len(), "extracted archive");
    Ok(report)
}

fn write_entry<R: Read>(entry: &mut R, target: &Path, is_dir: bool) -> Result<()> {
    if is_dir {
        return create_dirs(target);
    }
    if let Some(parent) = target.parent() {
        create_dirs(parent)?;
    }

    let write_err = |source| ToolError::WriteOutput {
        path: target.to_path_buf(),
        source,
    };
    let out = File::create(target).map_err(write_err)?;
    let mut writer = BufWriter::new(out);
    io::copy(entry, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)
}

fn create_dirs(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ToolError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
