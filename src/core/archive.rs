use crate::core::fetch::Fetch;
use crate::error::{Result, SwtError};
use crate::utils::fs;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

const ARCHIVE_PREFIX: &str = "swt-";
const ARCHIVE_SUFFIX: &str = ".zip";

/// Name of an SWT binary archive, `swt-<version>-<ws>-<os>-<arch>.zip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    file_name: String,
}

impl ArchiveName {
    pub fn parse(file_name: &str) -> Result<Self> {
        let name = Self {
            file_name: file_name.to_string(),
        };
        // Reject names the version rule cannot handle up front.
        name.version()?;
        Ok(name)
    }

    /// Takes the archive name from a `download.php?dropFile=<name>` link.
    pub fn from_download_url(url: &str) -> Result<Self> {
        let (_, file_name) = url
            .split_once('=')
            .ok_or_else(|| SwtError::InvalidArchiveName {
                name: url.to_string(),
            })?;
        Self::parse(file_name)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory name the archive is extracted into.
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(ARCHIVE_SUFFIX)
            .unwrap_or(&self.file_name)
    }

    /// The release version: the field between the `swt-` prefix and the
    /// platform part of the name.
    pub fn version(&self) -> Result<&str> {
        self.stem()
            .strip_prefix(ARCHIVE_PREFIX)
            .and_then(|rest| rest.split('-').next())
            .filter(|version| !version.is_empty())
            .ok_or_else(|| SwtError::InvalidArchiveName {
                name: self.file_name.clone(),
            })
    }
}

pub struct Downloader<'a> {
    fetcher: &'a dyn Fetch,
}

impl<'a> Downloader<'a> {
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self { fetcher }
    }

    /// Downloads the zip at `url` and extracts it into `destination`,
    /// replacing anything a previous extraction left there.
    pub fn download_and_extract(&self, url: &str, destination: &Path) -> Result<PathBuf> {
        fs::remove_dir_recursive(destination)?;

        println!("Downloading from {url}...");
        let bytes = self.fetcher.get_bytes(url)?;

        debug!("Extracting {} bytes to {destination:?}", bytes.len());
        fs::ensure_dir_exists(destination)?;
        self.extract_zip(ZipArchive::new(Cursor::new(bytes))?, destination)?;

        Ok(destination.to_path_buf())
    }

    fn extract_zip<R: Read + Seek>(&self, mut archive: ZipArchive<R>, destination: &Path) -> Result<()> {
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let outpath = match file.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if file.name().ends_with('/') {
                fs::ensure_dir_exists(&outpath)?;
            } else {
                if let Some(p) = outpath.parent() {
                    fs::ensure_dir_exists(p)?;
                }
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut file, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }
        Ok(())
    }
}
