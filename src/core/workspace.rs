use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory owning everything downloaded during a run. It is
/// removed when the handle is dropped, whichever way the run ends.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("swt-update-").tempdir()?;
        println!("Created temporary directory: {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn extraction_dir(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Removes the directory now, reporting failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}
