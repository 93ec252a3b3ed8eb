//! Filesystem access used while scanning.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Abstraction over the filesystem so it can be swapped or mocked.
///
/// Directory enumeration always goes through `walkdir`; the provider only
/// covers what the scan needs per entry: reading file content, reading link
/// targets and checking whether a resolved path is a directory.
pub trait Filesystem {
    /// Open a regular file for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Whether this provider can resolve symbolic link targets at all.
    fn supports_links(&self) -> bool {
        true
    }

    /// Read the target of the symbolic link at `path`, without following it.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Stat `path`, following symlinks, and report whether it is a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}

/// Default `Filesystem` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(path)?))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::metadata(path)?.is_dir())
    }
}
