use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Signature entries that would make the repackaged jar fail verification.
pub const SIGNATURE_ENTRIES: [&str; 3] = [
    "META-INF/ECLIPSE_.SF",
    "META-INF/ECLIPSE_.DSA",
    "META-INF/ECLIPSE_.RSA",
];

pub fn strip_signatures_command(zip_command: &str, jar: &Path) -> Command {
    let mut command = Command::new(zip_command);
    command.arg("-d").arg(jar).args(SIGNATURE_ENTRIES);
    command
}

/// Deletes the Eclipse signature entries from `jar` in place.
///
/// Some releases ship without these entries, so a failing `zip` run is only
/// logged.
pub fn strip_signatures(zip_command: &str, jar: &Path) {
    match strip_signatures_command(zip_command, jar).output() {
        Ok(output) if output.status.success() => {
            debug!(
                "Removed signature entries from {jar:?}: {}",
                String::from_utf8_lossy(&output.stdout).trim()
            );
        }
        Ok(output) => {
            debug!(
                "{zip_command} exited with {:?} for {jar:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Err(e) => {
            warn!("Could not run {zip_command} on {jar:?}: {e}");
        }
    }
}
