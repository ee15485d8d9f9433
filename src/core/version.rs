use crate::error::Result;
use std::cmp::Ordering;
use std::fs::read_dir;
use std::path::Path;

/// Returns the version installed under `artifact_dir`, if any.
///
/// When several version directories exist the highest one is reported.
pub fn installed_version(artifact_dir: &Path) -> Result<Option<String>> {
    if !artifact_dir.is_dir() {
        return Ok(None);
    }

    let mut versions = Vec::new();
    for entry in read_dir(artifact_dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                versions.push(name.to_string());
            }
        }
    }

    Ok(versions.into_iter().max_by(|a, b| version_compare(a, b)))
}

/// Whether a platform has to be downloaded and installed again.
///
/// Labels are compared exactly after trimming surrounding whitespace.
pub fn needs_update(remote: &str, local: Option<&str>, force: bool) -> bool {
    force || remote.trim() != local.unwrap_or("").trim()
}

fn version_compare(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        match (a_part.parse::<u32>(), b_part.parse::<u32>()) {
            (Ok(a_num), Ok(b_num)) => match a_num.cmp(&b_num) {
                Ordering::Equal => continue,
                other => return other,
            },
            _ => match a_part.cmp(b_part) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }

    a_parts.len().cmp(&b_parts.len())
}
