use crate::core::platform::{default_platforms, PlatformTarget};
use crate::error::{Result, SwtError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DOWNLOADS_URL: &str = "https://download.eclipse.org/eclipse/downloads/";
pub const DEFAULT_MIRROR_BASE_URL: &str = "https://www.eclipse.org/downloads/";
pub const LOCAL_REPO_DIR_NAME: &str = "local-proj-repo";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Working copy the local repository lives in. Always taken from the command line.
    #[serde(skip)]
    pub clone_root: PathBuf,
    pub downloads_url: String,
    pub mirror_base_url: String,
    pub group_id: String,
    pub maven_command: String,
    pub zip_command: String,
    pub follow_redirects: bool,
    pub platforms: Vec<PlatformTarget>,
}

impl Default for Config {
    fn default() -> Self {
        let clone_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Config {
            clone_root,
            downloads_url: DEFAULT_DOWNLOADS_URL.to_string(),
            mirror_base_url: DEFAULT_MIRROR_BASE_URL.to_string(),
            group_id: "local.swt".to_string(),
            maven_command: "mvn".to_string(),
            zip_command: "zip".to_string(),
            follow_redirects: false,
            platforms: default_platforms(),
        }
    }
}

impl Config {
    pub fn new(clone_root: PathBuf) -> Self {
        Config {
            clone_root,
            ..Config::default()
        }
    }

    /// Loads settings from an optional JSON file. Fields missing from the
    /// file keep their defaults.
    pub fn load(path: Option<&Path>, clone_root: PathBuf) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new(clone_root));
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            SwtError::config_error(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: Config = serde_json::from_str(&content).map_err(|e| {
            SwtError::config_error(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.clone_root = clone_root;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.group_id.split('.').any(str::is_empty) {
            return Err(SwtError::config_error(format!(
                "invalid group id '{}'",
                self.group_id
            )));
        }
        if self.platforms.is_empty() {
            return Err(SwtError::config_error("no platforms configured"));
        }
        Ok(())
    }

    pub fn local_repo_dir(&self) -> PathBuf {
        self.clone_root.join(LOCAL_REPO_DIR_NAME)
    }

    /// Directory Maven installs versions of `artifact_id` under.
    pub fn artifact_dir(&self, artifact_id: &str) -> PathBuf {
        let mut dir = self.local_repo_dir();
        for segment in self.group_id.split('.') {
            dir.push(segment);
        }
        dir.join(artifact_id)
    }

    /// The top-level entry of the local repository owned by our group id.
    pub fn canonical_repo_entry(&self) -> &str {
        self.group_id.split('.').next().unwrap_or(&self.group_id)
    }
}
