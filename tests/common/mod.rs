#![allow(dead_code)]

use directory_checksum::{scan_directory, ScanConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create files holding
/// `content`.
pub fn create_fixture(paths: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

pub fn populate(root: &Path, paths: &[(&str, &str)]) {
    for (p, content) in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, content).unwrap();
        }
    }
}

/// Scan, aggregate and print `root` on the real filesystem.
pub fn listing(root: &Path, depth: usize) -> String {
    directory_checksum::checksum_listing(&ScanConfig::new(root), depth).unwrap()
}

/// Root checksum of `root` as hex.
pub fn root_checksum(root: &Path) -> String {
    let mut scan = scan_directory(&ScanConfig::new(root)).unwrap();
    scan.tree.compute_checksums().unwrap().to_hex()
}
