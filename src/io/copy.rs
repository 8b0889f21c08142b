//! Destination tree lifecycle and metadata-preserving file copies

use crate::io::error::{Result, fs_error};
use filetime::FileTime;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Delete and recreate the output root
///
/// Destructive: any prior contents are discarded unconditionally. A root that
/// does not exist yet is not an error; missing parents are created.
///
/// # Errors
///
/// Returns an error if the existing tree cannot be removed or the fresh root
/// cannot be created.
pub fn reset_output_root(root: &Path) -> Result<()> {
    match fs::remove_dir_all(root) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(fs_error("remove directory tree", root, e)),
    }
    fs::create_dir_all(root).map_err(|e| fs_error("create directory", root, e))
}

/// Create a directory and all missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| fs_error("create directory", path, e))
}

/// Copy `src` to `dst`, carrying over access and modification timestamps
///
/// `std::fs::copy` preserves permissions but not timestamps; the fixture
/// contract requires tiles to keep the source's modification time, so the
/// timestamps are reapplied after the byte copy. Returns the number of bytes
/// copied.
///
/// # Errors
///
/// Returns an error if the source cannot be read, the destination cannot be
/// written, or its timestamps cannot be set.
pub fn copy_preserving_times(src: &Path, dst: &Path) -> Result<u64> {
    let bytes = fs::copy(src, dst).map_err(|e| fs_error("copy file", src, e))?;

    let metadata = fs::metadata(src).map_err(|e| fs_error("read metadata", src, e))?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dst, atime, mtime).map_err(|e| fs_error("set file times", dst, e))?;

    Ok(bytes)
}
