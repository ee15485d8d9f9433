//! Test doubles and portal page fixtures shared by unit tests.

use crate::core::fetch::Fetch;
use crate::core::maven::{Install, InstallRequest};
use crate::error::{Result, SwtError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

#[derive(Default)]
pub struct FakeFetcher {
    pages: RefCell<HashMap<String, String>>,
    blobs: RefCell<HashMap<String, Vec<u8>>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&self, url: &str, html: &str) {
        self.pages
            .borrow_mut()
            .insert(url.to_string(), html.to_string());
    }

    pub fn add_blob(&self, url: &str, bytes: Vec<u8>) {
        self.blobs.borrow_mut().insert(url.to_string(), bytes);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    fn not_found(url: &str) -> SwtError {
        SwtError::HttpStatus {
            url: url.to_string(),
            status: 404,
        }
    }
}

impl Fetch for FakeFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| Self::not_found(url))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.blobs
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| Self::not_found(url))
    }
}

/// Stands in for Maven: lays out the version directory the real command
/// would create, plus a stray top-level directory like Maven's own plugins.
#[derive(Default)]
pub struct RecordingInstaller {
    installs: RefCell<Vec<(String, String)>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn installs(&self) -> Vec<(String, String)> {
        self.installs.borrow().clone()
    }
}

impl Install for RecordingInstaller {
    fn install(&self, request: &InstallRequest) -> Result<()> {
        assert!(request.jar.exists(), "jar missing: {:?}", request.jar);

        let mut dir = request.repo_dir.clone();
        for segment in request.group_id.split('.') {
            dir.push(segment);
        }
        std::fs::create_dir_all(dir.join(&request.artifact_id).join(&request.version))?;
        std::fs::create_dir_all(request.repo_dir.join("org/apache/maven/plugins"))?;

        self.installs
            .borrow_mut()
            .push((request.artifact_id.clone(), request.version.clone()));
        Ok(())
    }
}

pub fn platform_labels() -> Vec<&'static str> {
    vec![
        "Windows (x86 64-bit)",
        "Windows (ARM 64-bit)",
        "Mac OSX (x86 64-bit)",
        "Mac OSX (ARM 64-bit)",
        "Linux (x86 64-bit)",
        "Linux (ARM 64-bit)",
    ]
}

fn platform_suffix(label: &str) -> &'static str {
    match label {
        "Windows (x86 64-bit)" => "win32-win32-x86_64",
        "Windows (ARM 64-bit)" => "win32-win32-aarch64",
        "Mac OSX (x86 64-bit)" => "cocoa-macosx-x86_64",
        "Mac OSX (ARM 64-bit)" => "cocoa-macosx-aarch64",
        "Linux (x86 64-bit)" => "gtk-linux-x86_64",
        "Linux (ARM 64-bit)" => "gtk-linux-aarch64",
        other => panic!("no fixture for platform {other}"),
    }
}

pub fn archive_file_name(version: &str, label: &str) -> String {
    format!("swt-{version}-{}.zip", platform_suffix(label))
}

pub fn landing_page(latest_label: &str, latest_href: &str) -> String {
    format!(
        r#"<html><head><title>Eclipse Project Downloads</title></head><body>
<a href="../">Eclipse Project</a>
<h3 id="Latest_Release">Latest Release</h3>
<table>
  <tr><th>Build Name</th><th>Build Status</th></tr>
  <tr><td><a href="{latest_href}">{latest_label}</a></td><td>OK</td></tr>
</table>
<h3 id="Older_Releases">Older Releases</h3>
<table>
  <tr><td><a href="drops4/R-4.29-202309031000/">4.29</a></td></tr>
  <tr><td><a href="drops4/R-4.28-202306050440/">4.28</a></td></tr>
</table>
</body></html>"#
    )
}

pub fn release_page(version: &str, labels: &[&str]) -> String {
    let rows: String = labels
        .iter()
        .map(|label| {
            let file = archive_file_name(version, label);
            format!(
                "  <tr><td>{label}</td><td><a href=\"download.php?dropFile={file}\">{file}</a></td><td>(sha512)</td></tr>\n"
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Eclipse {version}</title></head><body>
<h4 id="Platform">Platform Runtime Binary</h4>
<table>
  <tr><td>Linux (x86 64-bit)</td><td><a href="download.php?dropFile=eclipse-platform-{version}-linux.tar.gz">platform</a></td></tr>
</table>
<h4 id="SWT">SWT Binary and Source</h4>
<table>
  <tr><th>Platform</th><th>Download</th><th>Checksum</th></tr>
{rows}</table>
</body></html>"#
    )
}

/// Registers the three pages between `start` and the archive, returning the
/// URL the refresh page points at.
pub fn add_mirror_chain(
    fetcher: &FakeFetcher,
    start: &str,
    mirror_base_url: &str,
    file_name: &str,
) -> String {
    let zip_url = format!("https://www.eclipse.org/downloads/download.php?file=/eclipse/downloads/{file_name}");
    let mirror_path = format!("download.php?file=/eclipse/downloads/{file_name}&mirror_id=1");
    let final_url = format!("https://mirror.example/eclipse/downloads/{file_name}");

    fetcher.add_page(
        start,
        &format!(
            r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=UTF-8"><title>Download</title></head>
<body><p>Your download:</p><a href="{zip_url}">{file_name}</a></body></html>"#
        ),
    );
    fetcher.add_page(
        &zip_url,
        &format!(
            r#"<html><body><h2>Choose a mirror</h2>
<div class="col-md-24 mirror-well"><a href="{}">Main Eclipse Foundation mirror</a></div>
<div class="other-mirrors"><a href="download.php?mirror_id=2">Other</a></div></body></html>"#,
            mirror_path.replace('&', "&amp;")
        ),
    );
    fetcher.add_page(
        &format!("{mirror_base_url}{mirror_path}"),
        &format!(
            r#"<html><head><meta http-equiv="Refresh" content="0;url={final_url}"></head><body>Redirecting...</body></html>"#
        ),
    );

    final_url
}

pub fn swt_zip() -> Vec<u8> {
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));

    writer.start_file("swt.jar", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"jar bytes").unwrap();
    writer.start_file("src.zip", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"source bytes").unwrap();
    writer.add_directory("about_files/", SimpleFileOptions::default()).unwrap();
    writer
        .start_file("about_files/LICENSE.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"EPL").unwrap();

    writer.finish().unwrap().into_inner()
}

/// Registers a whole release: landing page, release page, and every
/// platform's mirror chain and archive.
pub fn add_release(fetcher: &FakeFetcher, downloads_url: &str, mirror_base_url: &str, version: &str) {
    let href = format!("drops4/R-{version}-202312010110/");
    fetcher.add_page(downloads_url, &landing_page(version, &href));

    let release_url = format!("{downloads_url}{href}");
    let labels = platform_labels();
    fetcher.add_page(&release_url, &release_page(version, &labels));

    for label in labels {
        let file_name = archive_file_name(version, label);
        let start = format!("{release_url}download.php?dropFile={file_name}");
        let final_url = add_mirror_chain(fetcher, &start, mirror_base_url, &file_name);
        fetcher.add_blob(&final_url, swt_zip());
    }
}
