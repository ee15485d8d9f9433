use crate::core::config::Config;
use crate::core::page::Page;
use crate::error::{Result, SwtError};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

/// Network access used by the update pipeline.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String>;

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;

    fn get_page(&self, url: &str) -> Result<Page> {
        Ok(Page::parse(&self.get_text(url)?))
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("swt-update/", env!("CARGO_PKG_VERSION"))),
        );

        let redirect = if config.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .default_headers(headers)
            .redirect(redirect)
            // Archive downloads from slow mirrors may take minutes.
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| SwtError::config_error(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<Response> {
        debug!("GET {url}");
        let response = self.client.get(url).send().map_err(|e| SwtError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SwtError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        self.send(url)?.text().map_err(|e| SwtError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self.send(url)?.bytes().map_err(|e| SwtError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!("Downloaded {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}
