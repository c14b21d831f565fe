use std::path::PathBuf;

/// An extracted archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    /// Position in the central directory
    pub index: usize,
    /// Corrected path relative to the output directory
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Turn a decoded entry name into a relative path
/// Drops empty, `.` and `..` components so the result cannot leave the output directory
pub fn sanitize_entry_path(name: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for component in name.split('/') {
        match component {
            "" | "." | ".." => continue,
            part => path.push(part),
        }
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
