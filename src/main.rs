use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use swt_update::commands::update::{UpdateOptions, UpdateReport, Updater};
use swt_update::core::{config::Config, fetch::HttpFetcher, maven::MavenInstaller, workspace::Workspace};

#[derive(Parser)]
#[clap(name = "swt-update")]
#[clap(about = "Download the latest SWT release and install it into the project's local Maven repository")]
#[clap(disable_version_flag = true)]
pub struct Cli {
    /// SWT release to install (e.g., 4.30); defaults to the latest release
    #[clap(short = 'v', long = "version", default_value = "")]
    version: String,
    /// Download and install even when the same version is already installed
    #[clap(short, long)]
    force: bool,
    /// Root of the git clone holding local-proj-repo (default: current directory)
    #[clap(short = 'c', long = "cloneroot")]
    cloneroot: Option<PathBuf>,
    /// JSON file overriding portal URLs, commands and platforms
    #[clap(long)]
    config: Option<PathBuf>,
    /// Increase log output (can be repeated)
    #[clap(long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("SWT_UPDATE_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn execute(cli: Cli) -> Result<UpdateReport> {
    let clone_root = match cli.cloneroot {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let config = Config::load(cli.config.as_deref(), clone_root)?;
    let options = UpdateOptions {
        version: Some(cli.version).filter(|v| !v.is_empty()),
        force: cli.force,
    };

    let workspace = Workspace::create()?;
    let interrupted_path = workspace.path().to_path_buf();
    ctrlc::set_handler(move || {
        let _ = std::fs::remove_dir_all(&interrupted_path);
        std::process::exit(130);
    })
    .context("Failed to set signal handler")?;

    let fetcher = HttpFetcher::new(&config)?;
    let installer = MavenInstaller::new(config.maven_command.clone());
    let report = Updater::new(&config, &workspace, &fetcher, &installer).run(&options)?;

    Ok(finish(report, workspace))
}

/// Removes the workspace; a failure there does not discard the installs.
fn finish(report: UpdateReport, workspace: Workspace) -> UpdateReport {
    if let Err(e) = workspace.close() {
        warn!("Failed to remove temporary directory: {e}");
    }
    report
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // `execute` owns the workspace, so it is gone before the process exits.
    match execute(cli) {
        Ok(report) => {
            report.print_summary();
            if report.has_failures() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
