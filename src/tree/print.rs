use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::Directory;
use crate::error::{Result, ScanError};

/// Type marker for a plain directory.
const DIR_MARKER: char = 'D';
/// Type marker for a directory reached via a symbolic link.
const SYMLINK_DIR_MARKER: char = 'S';
/// Type marker for files, symlinked or not.
const FILE_MARKER: char = 'F';

impl Directory {
    /// List this directory and its descendants with their checksums, one
    /// `<checksum> <marker> <path>` line each, pre-order, directories before
    /// files on every level.
    ///
    /// `max_depth` bounds how many directory levels below this one are
    /// expanded; 0 prints only this directory's own line. The root is shown
    /// as `.`. Fails if [`compute_checksums`](Directory::compute_checksums)
    /// has not run.
    pub fn print_checksums(&self, max_depth: usize) -> Result<String> {
        let mut out = String::new();
        self.print_into(&mut out, Path::new("."), max_depth)?;
        Ok(out)
    }

    fn print_into(&self, out: &mut String, path: &Path, depth: usize) -> Result<()> {
        let checksum = self.checksum.ok_or(ScanError::NotAggregated)?;
        let marker = if self.is_symlink {
            SYMLINK_DIR_MARKER
        } else {
            DIR_MARKER
        };
        let _ = writeln!(out, "{checksum} {marker} {}", path.display());

        if depth == 0 {
            return Ok(());
        }

        for (name, child) in &self.dirs {
            child.print_into(out, &child_path(path, Path::new(name)), depth - 1)?;
        }
        for (name, file) in &self.files {
            let _ = writeln!(
                out,
                "{} {FILE_MARKER} {}",
                file.checksum,
                child_path(path, Path::new(name)).display()
            );
        }
        Ok(())
    }
}

/// Children of the root are shown without a leading `./`.
fn child_path(parent: &Path, name: &Path) -> PathBuf {
    if parent == Path::new(".") {
        name.to_path_buf()
    } else {
        parent.join(name)
    }
}
