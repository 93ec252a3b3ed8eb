//! Error types for scanning and checksumming a directory tree.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{}: root path does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("{}: provided root path must point to a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: file system is unable to read symbolic links", .0.display())]
    SymlinkUnsupported(PathBuf),

    #[error("{}: I/O failure", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),

    #[error("{}: unsupported entry type ({kind})", .path.display())]
    UnsupportedEntry { path: PathBuf, kind: &'static str },

    #[error("{}: walked entry lies outside the scan root", .0.display())]
    OutsideRoot(PathBuf),

    #[error("{}: parent directory was not scanned before its contents", .0.display())]
    MissingParent(PathBuf),

    #[error("{}: directory symlink must not contain entries", .0.display())]
    PopulatedSymlink(PathBuf),

    #[error("directory checksums have not been computed yet")]
    NotAggregated,
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
