//! Classification of walked entries into the kinds the tree understands.

use std::fs::FileType;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::fs::Filesystem;

/// What a single directory entry is, decided once when it is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    SymlinkToFile,
    SymlinkToDirectory,
    /// Device, socket, pipe or other irregular entry. Never hashed.
    Unsupported(&'static str),
}

impl EntryKind {
    pub fn is_symlink(self) -> bool {
        matches!(self, EntryKind::SymlinkToFile | EntryKind::SymlinkToDirectory)
    }
}

/// Classify the entry at `path` whose `lstat` file type is `file_type`.
pub fn classify(path: &Path, file_type: FileType, fs: &dyn Filesystem) -> Result<EntryKind> {
    if file_type.is_dir() {
        return Ok(EntryKind::Directory);
    }
    if file_type.is_file() {
        return Ok(EntryKind::File);
    }
    if file_type.is_symlink() {
        return classify_symlink(path, fs);
    }
    Ok(EntryKind::Unsupported(irregular_kind(file_type)))
}

/// A symlink's kind depends on what its (resolved) target is.
fn classify_symlink(path: &Path, fs: &dyn Filesystem) -> Result<EntryKind> {
    if !fs.supports_links() {
        return Err(ScanError::SymlinkUnsupported(path.to_path_buf()));
    }
    let target = fs
        .read_link(path)
        .map_err(|e| ScanError::io(path, e))?;

    // Relative targets are relative to the directory containing the link.
    let resolved = if target.is_absolute() {
        target
    } else {
        path.parent().unwrap_or(Path::new("")).join(target)
    };

    // Dangling and looping links both fail the stat and abort the scan.
    let is_dir = fs.is_dir(&resolved).map_err(|e| ScanError::io(&resolved, e))?;
    debug!("symlink {} -> {} (dir: {is_dir})", path.display(), resolved.display());
    if is_dir {
        Ok(EntryKind::SymlinkToDirectory)
    } else {
        Ok(EntryKind::SymlinkToFile)
    }
}

#[cfg(unix)]
fn irregular_kind(file_type: FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_char_device() {
        "character device"
    } else if file_type.is_block_device() {
        "block device"
    } else if file_type.is_socket() {
        "socket"
    } else if file_type.is_fifo() {
        "named pipe"
    } else {
        "irregular file"
    }
}

#[cfg(not(unix))]
fn irregular_kind(_file_type: FileType) -> &'static str {
    "irregular file"
}
