//! In-memory directory tree, checksum aggregation and listing.

mod aggregate;
mod print;

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path};

use crate::classify::EntryKind;
use crate::digest::{digest_path, Digest};
use crate::error::{Result, ScanError};
use crate::fs::Filesystem;

/// A file (or symlink to a file) and its content digest. Never mutated once inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    checksum: Digest,
    is_symlink: bool,
}

impl FileEntry {
    pub fn new(checksum: Digest, is_symlink: bool) -> Self {
        FileEntry {
            checksum,
            is_symlink,
        }
    }

    pub fn checksum(&self) -> Digest {
        self.checksum
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

/// A directory on disk with its immediate children.
///
/// Children are keyed by their raw name in ordered maps, so every traversal
/// visits them in ascending byte order regardless of how the filesystem
/// enumerated them. `checksum` stays `None` until
/// [`compute_checksums`](Directory::compute_checksums) runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Directory {
    files: BTreeMap<OsString, FileEntry>,
    dirs: BTreeMap<OsString, Directory>,
    is_symlink: bool,
    checksum: Option<Digest>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory reached through a symbolic link. It stays a leaf.
    pub fn new_symlink() -> Self {
        Directory {
            is_symlink: true,
            ..Self::default()
        }
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// The aggregate digest, once computed.
    pub fn checksum(&self) -> Option<Digest> {
        self.checksum
    }

    pub fn files(&self) -> impl Iterator<Item = (&OsStr, &FileEntry)> {
        self.files.iter().map(|(k, v)| (k.as_os_str(), v))
    }

    pub fn file(&self, name: impl AsRef<OsStr>) -> Option<&FileEntry> {
        self.files.get(name.as_ref())
    }

    pub fn dir(&self, name: impl AsRef<OsStr>) -> Option<&Directory> {
        self.dirs.get(name.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Insert a pre-digested file entry directly under this directory.
    pub fn insert_file(&mut self, name: impl Into<OsString>, entry: FileEntry) {
        self.files.insert(name.into(), entry);
    }

    /// Insert a child directory directly under this directory.
    pub fn insert_dir(&mut self, name: impl Into<OsString>, dir: Directory) {
        self.dirs.insert(name.into(), dir);
    }

    /// Route the entry at `relative_path` (relative to `root`) to its parent
    /// node and add it there.
    ///
    /// `remaining` is the part of `relative_path` still to descend through and
    /// starts out equal to it. Directories become empty placeholder nodes;
    /// files and file symlinks are digested right away via `fs`. All
    /// ancestors must already have been inserted.
    pub fn insert(
        &mut self,
        remaining: &Path,
        relative_path: &Path,
        kind: EntryKind,
        root: &Path,
        fs: &dyn Filesystem,
    ) -> Result<()> {
        let mut components = remaining.components();
        let head = match components.next() {
            Some(Component::Normal(name)) => name,
            _ => return Err(ScanError::MissingParent(relative_path.to_path_buf())),
        };
        let rest = components.as_path();

        if !rest.as_os_str().is_empty() {
            let child = self
                .dirs
                .get_mut(head)
                .ok_or_else(|| ScanError::MissingParent(relative_path.to_path_buf()))?;
            return child.insert(rest, relative_path, kind, root, fs);
        }

        match kind {
            EntryKind::Directory => self.insert_dir(head, Directory::new()),
            EntryKind::SymlinkToDirectory => self.insert_dir(head, Directory::new_symlink()),
            EntryKind::File | EntryKind::SymlinkToFile => {
                let is_symlink = kind.is_symlink();
                let checksum = digest_path(&root.join(relative_path), is_symlink, fs)?;
                self.insert_file(head, FileEntry::new(checksum, is_symlink));
            }
            EntryKind::Unsupported(kind) => {
                return Err(ScanError::UnsupportedEntry {
                    path: relative_path.to_path_buf(),
                    kind,
                })
            }
        }
        Ok(())
    }
}
