use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwtError>;

#[derive(Error, Debug)]
pub enum SwtError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Version '{version}' not found for download")]
    VersionNotFound { version: String },

    #[error("Page structure changed: could not find {what}")]
    ElementNotFound { what: String },

    #[error("Page structure changed: <{element}> has no '{attribute}' attribute")]
    AttributeNotFound { element: String, attribute: String },

    #[error("No download link for platform '{label}'")]
    PlatformNotFound { label: String },

    #[error("Invalid refresh directive: '{content}'")]
    InvalidRefresh { content: String },

    #[error("Unexpected archive name: '{name}'")]
    InvalidArchiveName { name: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("did not find {name} command in the execute path")]
    ToolNotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl SwtError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        SwtError::ConfigError {
            message: message.into(),
        }
    }

    pub fn element_not_found<S: Into<String>>(what: S) -> Self {
        SwtError::ElementNotFound { what: what.into() }
    }

    /// Errors that end the whole run rather than a single platform.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SwtError::VersionNotFound { .. }
                | SwtError::ToolNotFound { .. }
                | SwtError::ConfigError { .. }
        )
    }
}
