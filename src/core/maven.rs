use crate::error::{Result, SwtError};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Coordinates and locations for one `install:install-file` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub jar: PathBuf,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub repo_dir: PathBuf,
}

impl InstallRequest {
    pub fn maven_args(&self) -> Vec<String> {
        vec![
            "install:install-file".to_string(),
            format!("-Dfile={}", self.jar.display()),
            format!("-DgroupId={}", self.group_id),
            format!("-DartifactId={}", self.artifact_id),
            format!("-Dversion={}", self.version),
            "-Dpackaging=jar".to_string(),
            format!("-Dmaven.repo.local={}", self.repo_dir.display()),
        ]
    }
}

pub trait Install {
    fn install(&self, request: &InstallRequest) -> Result<()>;
}

pub struct MavenInstaller {
    command: String,
}

impl MavenInstaller {
    pub fn new<S: Into<String>>(command: S) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Install for MavenInstaller {
    fn install(&self, request: &InstallRequest) -> Result<()> {
        let mvn = which::which(&self.command).map_err(|_| SwtError::ToolNotFound {
            name: self.command.clone(),
        })?;

        println!(
            "Installing {}:{}:{} into {}",
            request.group_id,
            request.artifact_id,
            request.version,
            request.repo_dir.display()
        );
        debug!("Running {mvn:?} {:?}", request.maven_args());

        // The exit status is reported but does not stop the run.
        let status = Command::new(&mvn).args(request.maven_args()).status()?;
        if !status.success() {
            warn!(
                "{} exited with status {:?} while installing {}",
                self.command,
                status.code(),
                request.artifact_id
            );
        }

        Ok(())
    }
}
