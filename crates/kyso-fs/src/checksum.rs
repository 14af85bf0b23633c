//! SHA-256 content hashing
//!
//! The platform stores the hex SHA-256 of every pushed file and the diff
//! engine compares against it verbatim, so the format here is plain
//! lowercase hex with no algorithm prefix.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Compute the SHA-256 of in-memory bytes as lowercase hex.
pub fn compute_content_checksum(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    hex::encode(hasher.finalize())
}

/// Compute the SHA-256 of a file's contents as lowercase hex.
///
/// The file is streamed through the hasher rather than read whole.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
