use sha1::{Digest as _, Sha1};
use std::path::Path;

use super::Directory;
use crate::digest::{finish, Digest};
use crate::error::{Result, ScanError};

impl Directory {
    /// Compute the checksum of this directory and every directory below it,
    /// returning this directory's checksum. File checksums must already be set,
    /// which insertion guarantees.
    ///
    /// The hash input lists subdirectories then files, each in ascending name
    /// order, one line per child:
    ///
    /// ```text
    /// '<dir name>' <dir checksum>
    /// '<file name>' <true|false> <file checksum>
    /// ```
    pub fn compute_checksums(&mut self) -> Result<Digest> {
        self.aggregate(Path::new("."))
    }

    fn aggregate(&mut self, path: &Path) -> Result<Digest> {
        if self.is_symlink {
            if !self.is_empty() {
                return Err(ScanError::PopulatedSymlink(path.to_path_buf()));
            }
            self.checksum = Some(Digest::SENTINEL);
            return Ok(Digest::SENTINEL);
        }

        let mut hasher = Sha1::new();

        for (name, child) in self.dirs.iter_mut() {
            let child_checksum = child.aggregate(&path.join(name))?;
            hasher.update(b"'");
            hasher.update(name.as_encoded_bytes());
            hasher.update(format!("' {child_checksum}\n").as_bytes());
        }
        for (name, file) in &self.files {
            hasher.update(b"'");
            hasher.update(name.as_encoded_bytes());
            hasher.update(format!("' {} {}\n", file.is_symlink, file.checksum).as_bytes());
        }

        let checksum = finish(hasher);
        self.checksum = Some(checksum);
        Ok(checksum)
    }
}
