//! ZIP payloads for report push and pull
//!
//! Pushes upload the collected report files as one deflated archive; pulls
//! and clones receive the same shape back. Entry names are always
//! root-relative with forward slashes.

use std::fs::{self, File};
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::collector::relative_name;
use crate::{Error, Result};

/// Pack `files` (native paths under `root`) into an in-memory ZIP archive.
pub fn pack(root: &Path, files: &[PathBuf]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::<()>::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for file in files {
        let name = relative_name(root, file);
        zip.start_file(name.as_str(), options)?;
        let mut source = File::open(file).map_err(|e| Error::io(file, e))?;
        io::copy(&mut source, &mut zip).map_err(|e| Error::io(file, e))?;
    }

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();
    tracing::debug!(files = files.len(), bytes = bytes.len(), "Packed report archive");
    Ok(bytes)
}

/// Extract a ZIP archive into `dest`, returning the files written.
///
/// Entries whose names would resolve outside `dest` are rejected.
pub fn unpack(bytes: &[u8], dest: &Path) -> Result<Vec<PathBuf>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut written = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = entry.enclosed_name().ok_or_else(|| Error::Archive {
            message: format!("Refusing unsafe entry name {:?}", entry.name()),
        })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| Error::io(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let mut out = File::create(&out_path).map_err(|e| Error::io(&out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| Error::io(&out_path, e))?;
        out.flush().map_err(|e| Error::io(&out_path, e))?;
        written.push(out_path);
    }

    tracing::debug!(files = written.len(), dest = %dest.display(), "Unpacked report archive");
    Ok(written)
}

/// Names of the file entries in an archive, in archive order.
pub fn entry_names(bytes: &[u8]) -> Result<Vec<String>> {
    let archive = ZipArchive::new(Cursor::new(bytes))?;
    Ok(archive
        .file_names()
        .filter(|name| !name.ends_with('/'))
        .map(str::to_string)
        .collect())
}
