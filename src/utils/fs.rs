use crate::error::{Result, SwtError};
use std::path::Path;

fn map_io_error(path: &Path, e: std::io::Error) -> SwtError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => SwtError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => SwtError::from(e),
    }
}

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))?;
    }
    Ok(())
}

pub fn remove_dir_recursive(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e))?;
    }
    Ok(())
}

/// Removes a directory tree or a single file, whichever is at `path`.
pub fn remove_entry(path: &Path) -> Result<()> {
    if path.is_dir() {
        remove_dir_recursive(path)
    } else {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e))
    }
}
