#![forbid(unsafe_code)]
//! directory-checksum — a deterministic content checksum of an entire directory tree.

pub mod classify;
pub mod cli;
pub mod digest;
pub mod error;
pub mod fs;
pub mod scan;
pub mod tree;

pub use digest::Digest;
pub use error::{Result, ScanError};
pub use scan::{checksum_listing, scan_directory, Scan, ScanConfig, UnsupportedPolicy};
pub use tree::{Directory, FileEntry};
