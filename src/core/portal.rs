//! Navigation of the Eclipse download portal.
//!
//! Every lookup here is tied to the current markup of the portal pages. A
//! missing element is reported as a page-structure error, not retried.

use crate::core::fetch::Fetch;
use crate::core::page::{required_attr, text, Page};
use crate::error::{Result, SwtError};
use tracing::debug;

pub const LATEST_RELEASE_ID: &str = "Latest_Release";
pub const SWT_SECTION_ID: &str = "SWT";
pub const MIRROR_CLASS: &str = "mirror-well";

/// A release as listed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLink {
    pub label: String,
    /// Path of the release's download page, relative to the landing page.
    /// `None` when a requested label matched no link.
    pub href: Option<String>,
}

/// Picks the release to install from the landing page: the first link of the
/// "Latest Release" section, or the first link whose text contains `requested`.
pub fn resolve_release(page: &Page, requested: Option<&str>) -> Result<ReleaseLink> {
    match requested {
        None => {
            let section = page
                .find_by_id(LATEST_RELEASE_ID)
                .ok_or_else(|| SwtError::element_not_found(format!("#{LATEST_RELEASE_ID}")))?;
            let anchor = page.find_next(section, "a").ok_or_else(|| {
                SwtError::element_not_found(format!("link after #{LATEST_RELEASE_ID}"))
            })?;

            Ok(ReleaseLink {
                label: text(anchor),
                href: Some(required_attr(anchor, "href")?),
            })
        }
        Some(label) => {
            let href = page
                .links()
                .find(|a| text(*a).contains(label))
                .and_then(|a| a.value().attr("href").map(str::to_string));

            Ok(ReleaseLink {
                label: label.to_string(),
                href,
            })
        }
    }
}

/// Finds the download link next to the table cell reading `label` in the
/// SWT section of a release page.
pub fn find_platform_link(page: &Page, label: &str) -> Result<String> {
    let marker = page
        .find_by_id(SWT_SECTION_ID)
        .ok_or_else(|| SwtError::element_not_found(format!("#{SWT_SECTION_ID}")))?;

    let cell = page
        .find_all_next(marker, "td")
        .find(|td| text(*td).trim() == label)
        .ok_or_else(|| SwtError::PlatformNotFound {
            label: label.to_string(),
        })?;

    let anchor = page
        .find_next(cell, "a")
        .ok_or_else(|| SwtError::element_not_found(format!("link after '{label}' cell")))?;

    required_attr(anchor, "href")
}

/// Follows the download page, the mirror list and the refresh page to the
/// URL the archive is actually served from.
pub fn follow_mirror_chain(fetcher: &dyn Fetch, url: &str, mirror_base_url: &str) -> Result<String> {
    let page = fetcher.get_page(url)?;
    let zip_url = archive_page_link(&page)?;
    debug!("Archive page: {zip_url}");

    let page = fetcher.get_page(&zip_url)?;
    let mirror_url = format!("{mirror_base_url}{}", mirror_link(&page)?);
    debug!("Mirror page: {mirror_url}");

    let page = fetcher.get_page(&mirror_url)?;
    refresh_target(&page)
}

fn archive_page_link(page: &Page) -> Result<String> {
    let meta = page
        .find_first("meta")
        .ok_or_else(|| SwtError::element_not_found("<meta>"))?;
    let anchor = page
        .find_next(meta, "a")
        .ok_or_else(|| SwtError::element_not_found("link after <meta>"))?;
    required_attr(anchor, "href")
}

fn mirror_link(page: &Page) -> Result<String> {
    let well = page
        .find_with_class("div", MIRROR_CLASS)
        .ok_or_else(|| SwtError::element_not_found(format!("div.{MIRROR_CLASS}")))?;
    let anchor = page
        .find_next(well, "a")
        .ok_or_else(|| SwtError::element_not_found(format!("link in div.{MIRROR_CLASS}")))?;
    required_attr(anchor, "href")
}

fn refresh_target(page: &Page) -> Result<String> {
    let meta = page
        .find_with_attr("meta", "http-equiv", "Refresh")
        .ok_or_else(|| SwtError::element_not_found("<meta http-equiv=\"Refresh\">"))?;
    parse_refresh_content(&required_attr(meta, "content")?)
}

/// Extracts the target of a `<seconds>;url=<target>` refresh directive.
pub fn parse_refresh_content(content: &str) -> Result<String> {
    let invalid = || SwtError::InvalidRefresh {
        content: content.to_string(),
    };

    let (_, directive) = content.split_once(';').ok_or_else(invalid)?;
    let (_, target) = directive.split_once('=').ok_or_else(invalid)?;

    let target = target.trim();
    if target.is_empty() {
        return Err(invalid());
    }
    Ok(target.to_string())
}
