//! Walking a directory and building its checksum tree.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::classify::{classify, EntryKind};
use crate::error::{Result, ScanError};
use crate::fs::{Filesystem, OsFilesystem};
use crate::tree::Directory;

/// What to do with devices, sockets, pipes and other irregular entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Leave the entry out of the tree and log a warning.
    #[default]
    Skip,
    /// Abort the scan.
    Fail,
}

/// Configuration for a single scan.
pub struct ScanConfig<'a> {
    /// Directory to scan. Relative paths resolve against the working directory.
    pub root: PathBuf,
    /// Provider used for file content and symlink resolution.
    pub fs: &'a dyn Filesystem,
    pub unsupported: UnsupportedPolicy,
}

impl ScanConfig<'static> {
    /// Scan `root` on the real filesystem, skipping unsupported entries.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScanConfig {
            root: root.into(),
            fs: &OsFilesystem,
            unsupported: UnsupportedPolicy::Skip,
        }
    }
}

/// Result of walking a directory: the populated tree plus bookkeeping.
#[derive(Debug)]
pub struct Scan {
    /// Absolute, canonical path of the scanned root.
    pub root: PathBuf,
    pub tree: Directory,
    /// Relative paths of unsupported entries that were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Walk `config.root` and build its tree. File checksums are computed as
/// files are inserted; directory checksums are not, see
/// [`Directory::compute_checksums`].
pub fn scan_directory(config: &ScanConfig<'_>) -> Result<Scan> {
    let root = resolve_root(&config.root, config.fs)?;

    let mut tree = Directory::new();
    let mut skipped = Vec::new();

    // Parents are always yielded before their contents; name-sorting only
    // makes the log output stable.
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }

        let relative = relative_to(&root, entry.path())?;

        let kind = classify(entry.path(), entry.file_type(), config.fs)?;
        if let EntryKind::Unsupported(what) = kind {
            match config.unsupported {
                UnsupportedPolicy::Skip => {
                    warn!("skipping {} ({what})", relative.display());
                    skipped.push(relative);
                    continue;
                }
                UnsupportedPolicy::Fail => {
                    return Err(ScanError::UnsupportedEntry {
                        path: relative,
                        kind: what,
                    })
                }
            }
        }

        debug!("{:?} {}", kind, relative.display());
        tree.insert(&relative, &relative, kind, &root, config.fs)?;
    }

    info!(
        "scanned {} ({} unsupported entries skipped)",
        root.display(),
        skipped.len()
    );

    Ok(Scan {
        root,
        tree,
        skipped,
    })
}

/// Walk, checksum and list `config.root` in one go.
pub fn checksum_listing(config: &ScanConfig<'_>, max_depth: usize) -> Result<String> {
    let mut scan = scan_directory(config)?;
    scan.tree.compute_checksums()?;
    scan.tree.print_checksums(max_depth)
}

fn relative_to(root: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| ScanError::OutsideRoot(path.to_path_buf()))
}

fn resolve_root(root: &Path, fs: &dyn Filesystem) -> Result<PathBuf> {
    let resolved = root.canonicalize().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::RootNotFound(root.to_path_buf()),
        _ => ScanError::io(root, e),
    })?;
    let is_dir = fs.is_dir(&resolved).map_err(|e| ScanError::io(&resolved, e))?;
    if !is_dir {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(resolved)
}
