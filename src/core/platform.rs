use serde::{Deserialize, Serialize};

/// A platform build of SWT: the Maven artifact it is installed as, and the
/// label the download page uses for it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlatformTarget {
    pub artifact_id: String,
    pub label: String,
}

impl PlatformTarget {
    pub fn new<A: Into<String>, L: Into<String>>(artifact_id: A, label: L) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            label: label.into(),
        }
    }
}

pub fn default_platforms() -> Vec<PlatformTarget> {
    vec![
        PlatformTarget::new("swtwin32_x86_64", "Windows (x86 64-bit)"),
        PlatformTarget::new("swtwin32_aarch64", "Windows (ARM 64-bit)"),
        PlatformTarget::new("swtmac_x86_64", "Mac OSX (x86 64-bit)"),
        PlatformTarget::new("swtmac_aarch64", "Mac OSX (ARM 64-bit)"),
        PlatformTarget::new("swtlinux_x86_64", "Linux (x86 64-bit)"),
        PlatformTarget::new("swtlinux_aarch64", "Linux (ARM 64-bit)"),
    ]
}
