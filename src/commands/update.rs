use crate::commands::cleanup;
use crate::core::archive::{ArchiveName, Downloader};
use crate::core::config::Config;
use crate::core::fetch::Fetch;
use crate::core::maven::{Install, InstallRequest};
use crate::core::platform::PlatformTarget;
use crate::core::portal::{self, ReleaseLink};
use crate::core::workspace::Workspace;
use crate::core::{sanitize, version};
use crate::error::{Result, SwtError};
use tracing::{debug, error};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Release label to install instead of the latest release.
    pub version: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformOutcome {
    Installed { version: String },
    UpToDate { version: String },
    Failed { reason: String },
}

#[derive(Debug, Default)]
pub struct UpdateReport {
    pub outcomes: Vec<(PlatformTarget, PlatformOutcome)>,
}

impl UpdateReport {
    pub fn installed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, PlatformOutcome::Installed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| matches!(o, PlatformOutcome::Failed { .. }))
    }

    pub fn print_summary(&self) {
        println!();
        println!("SWT update summary:");
        for (target, outcome) in &self.outcomes {
            match outcome {
                PlatformOutcome::Installed { version } => {
                    println!("  ✅ {} installed version {version}", target.artifact_id)
                }
                PlatformOutcome::UpToDate { version } => {
                    println!("  ✓  {} already at version {version}", target.artifact_id)
                }
                PlatformOutcome::Failed { reason } => {
                    println!("  ❌ {} failed: {reason}", target.artifact_id)
                }
            }
        }

        if self.installed_count() > 0 {
            println!();
            println!("Update the SWT dependency version in pom.xml to the installed version.");
        }
    }
}

pub struct Updater<'a> {
    config: &'a Config,
    workspace: &'a Workspace,
    fetcher: &'a dyn Fetch,
    installer: &'a dyn Install,
}

impl<'a> Updater<'a> {
    pub fn new(
        config: &'a Config,
        workspace: &'a Workspace,
        fetcher: &'a dyn Fetch,
        installer: &'a dyn Install,
    ) -> Self {
        Self {
            config,
            workspace,
            fetcher,
            installer,
        }
    }

    /// Updates every configured platform, then prunes the local repository.
    ///
    /// A fatal error stops the run; any other failure is recorded against its
    /// platform and the next platform is tried.
    pub fn run(&self, options: &UpdateOptions) -> Result<UpdateReport> {
        let landing = self.fetcher.get_page(&self.config.downloads_url)?;
        let release = portal::resolve_release(&landing, options.version.as_deref())?;
        if options.version.is_none() {
            println!("Found download version: {}", release.label);
        }

        let mut report = UpdateReport::default();
        for target in &self.config.platforms {
            let outcome = match self.update_platform(target, &release, options.force) {
                Ok(outcome) => outcome,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!("Updating {} failed: {e}", target.artifact_id);
                    PlatformOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.outcomes.push((target.clone(), outcome));
        }

        cleanup::prune_local_repo(self.config)?;

        Ok(report)
    }

    pub fn update_platform(
        &self,
        target: &PlatformTarget,
        release: &ReleaseLink,
        force: bool,
    ) -> Result<PlatformOutcome> {
        let local = version::installed_version(&self.config.artifact_dir(&target.artifact_id))?;
        if let Some(local) = &local {
            println!("Found local version for {}: {local}", target.artifact_id);
        }

        println!(
            "Comparing versions - Local: '{}', Download: '{}'",
            local.as_deref().unwrap_or(""),
            release.label
        );
        if !version::needs_update(&release.label, local.as_deref(), force) {
            println!(
                "Skipping download for {} - version {} already installed",
                target.artifact_id, release.label
            );
            return Ok(PlatformOutcome::UpToDate {
                version: release.label.clone(),
            });
        }

        let href = release
            .href
            .as_deref()
            .ok_or_else(|| SwtError::VersionNotFound {
                version: release.label.clone(),
            })?;

        let release_url = format!("{}{href}", self.config.downloads_url);
        let release_page = self.fetcher.get_page(&release_url)?;
        let link = portal::find_platform_link(&release_page, &target.label)?;
        let download_url = format!("{release_url}{link}");
        debug!("Download page for {}: {download_url}", target.label);

        let archive = ArchiveName::from_download_url(&download_url)?;
        let binary_url =
            portal::follow_mirror_chain(self.fetcher, &download_url, &self.config.mirror_base_url)?;

        let extracted = Downloader::new(self.fetcher)
            .download_and_extract(&binary_url, &self.workspace.extraction_dir(archive.stem()))?;
        let jar = extracted.join("swt.jar");
        sanitize::strip_signatures(&self.config.zip_command, &jar);

        let version = archive.version()?.to_string();
        self.installer.install(&InstallRequest {
            jar,
            group_id: self.config.group_id.clone(),
            artifact_id: target.artifact_id.clone(),
            version: version.clone(),
            repo_dir: self.config.local_repo_dir(),
        })?;

        Ok(PlatformOutcome::Installed { version })
    }
}
