//! SHA-1 content digests for files, symlinks and directory listings.

use sha1::{Digest as _, Sha1};
use std::fmt;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::fs::Filesystem;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// A 160-bit SHA-1 digest. Displays as 40 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// All-zero placeholder assigned to directories reached via a symlink.
    pub const SENTINEL: Digest = Digest([0; DIGEST_LEN]);

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Digest an in-memory buffer.
pub fn digest_bytes(data: &[u8]) -> Digest {
    let mut hasher = Sha1::new();
    hasher.update(data);
    finish(hasher)
}

/// Digest a byte stream, reading it to the end.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(finish(hasher))
}

pub(crate) fn finish(hasher: Sha1) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    Digest(out)
}

/// Digest a symbolic link's target path. The target string is the link's content.
pub fn digest_link_target(target: &Path) -> Digest {
    digest_bytes(target.as_os_str().as_encoded_bytes())
}

/// Digest the entry at `path` through `fs`: file content for regular files,
/// the link target for symbolic links.
pub fn digest_path(path: &Path, is_symlink: bool, fs: &dyn Filesystem) -> Result<Digest> {
    if is_symlink {
        if !fs.supports_links() {
            return Err(ScanError::SymlinkUnsupported(path.to_path_buf()));
        }
        let target = fs.read_link(path).map_err(|e| ScanError::io(path, e))?;
        return Ok(digest_link_target(&target));
    }
    let reader = fs.open(path).map_err(|e| ScanError::io(path, e))?;
    digest_reader(reader).map_err(|e| ScanError::io(path, e))
}
