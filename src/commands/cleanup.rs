use crate::core::config::Config;
use crate::error::Result;
use crate::utils::fs;
use std::path::PathBuf;

/// Top-level entries of the local repository that do not belong to our
/// group, typically plugins Maven downloaded while installing.
pub fn list_stray_entries(config: &Config) -> Result<Vec<PathBuf>> {
    let repo_dir = config.local_repo_dir();
    let mut stray = Vec::new();

    if !repo_dir.is_dir() {
        return Ok(stray);
    }

    for entry in std::fs::read_dir(&repo_dir)? {
        let entry = entry?;
        if entry.file_name() != config.canonical_repo_entry() {
            stray.push(entry.path());
        }
    }

    stray.sort();
    Ok(stray)
}

/// Removes every top-level entry of the local repository except our group's.
pub fn prune_local_repo(config: &Config) -> Result<Vec<PathBuf>> {
    let stray = list_stray_entries(config)?;

    for path in &stray {
        println!("Removing {}", path.display());
        fs::remove_entry(path)?;
    }

    Ok(stray)
}
