// src/host/page.rs
//
// The "active page" the extractor runs against. Scripts are plain function
// pointers, so they can't capture anything from the caller; the only thing
// that crosses back is the returned list of strings.

use std::{fs, path::PathBuf};

use scraper::{Html, Selector};

use crate::error::HostError;

/// Identifier + location of the foreground page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub id: u32,
    pub url: String,
}

/// Function executed inside a page.
pub type PageScript = fn(&Html) -> Vec<String>;

pub trait PageHost {
    /// The page currently in front of the user, if any.
    fn active_page(&mut self) -> Result<Option<PageContext>, HostError>;

    /// Run `script` inside page `page_id` and return its output.
    fn run_in_page(&mut self, page_id: u32, script: PageScript) -> Result<Vec<String>, HostError>;
}

/// Where a saved page claims it came from: `<link rel=canonical>`, then `og:url`.
pub fn discover_location(doc: &Html) -> Option<String> {
    const PROBES: [(&str, &str); 2] = [
        (r#"link[rel="canonical"]"#, "href"),
        (r#"meta[property="og:url"]"#, "content"),
    ];

    PROBES.iter().find_map(|(css, attr)| {
        let sel = Selector::parse(css).ok()?;
        doc.select(&sel)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_owned)
    })
}

/* ---------------- Saved page on disk ---------------- */

/// A page the user saved from their browser. Each `active_page` call re-reads
/// the file and hands out a fresh id; scripts only run against the latest one.
pub struct SavedPageHost {
    path: PathBuf,
    url_override: Option<String>,
    loaded: Option<(u32, String)>,
    next_id: u32,
}

impl SavedPageHost {
    pub fn new(path: impl Into<PathBuf>, url_override: Option<String>) -> Self {
        Self {
            path: path.into(),
            url_override: url_override.filter(|u| !u.trim().is_empty()),
            loaded: None,
            next_id: 1,
        }
    }
}

impl PageHost for SavedPageHost {
    fn active_page(&mut self) -> Result<Option<PageContext>, HostError> {
        if self.path.as_os_str().is_empty() {
            return Ok(None);
        }
        // Invalid UTF-8 bytes become U+FFFD; the rest of the page still scans.
        let bytes = fs::read(&self.path).map_err(|source| HostError::ReadPage {
            path: self.path.clone(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes).into_owned();

        let url = match &self.url_override {
            Some(u) => u.trim().to_string(),
            None => discover_location(&Html::parse_document(&html)).unwrap_or_default(),
        };

        let id = self.next_id;
        self.next_id += 1;
        self.loaded = Some((id, html));
        logd!("Page: loaded {} as id={} url={:?}", self.path.display(), id, url);

        Ok(Some(PageContext { id, url }))
    }

    fn run_in_page(&mut self, page_id: u32, script: PageScript) -> Result<Vec<String>, HostError> {
        match &self.loaded {
            Some((id, html)) if *id == page_id => Ok(script(&Html::parse_document(html))),
            _ => Err(HostError::PageGone(page_id)),
        }
    }
}

/* ---------------- Page already in memory ---------------- */

/// HTML held in memory (stdin, tests). Always page id 1.
pub struct InlinePageHost {
    url: Option<String>,
    html: String,
}

impl InlinePageHost {
    pub const PAGE_ID: u32 = 1;

    pub fn new(url: Option<String>, html: impl Into<String>) -> Self {
        Self { url, html: html.into() }
    }

    /// Location taken from the document itself when none is given.
    pub fn discovering(html: impl Into<String>) -> Self {
        let html = html.into();
        let url = discover_location(&Html::parse_document(&html));
        Self { url, html }
    }
}

impl PageHost for InlinePageHost {
    fn active_page(&mut self) -> Result<Option<PageContext>, HostError> {
        Ok(self.url.clone().map(|url| PageContext { id: Self::PAGE_ID, url }))
    }

    fn run_in_page(&mut self, page_id: u32, script: PageScript) -> Result<Vec<String>, HostError> {
        if page_id != Self::PAGE_ID {
            return Err(HostError::PageGone(page_id));
        }
        Ok(script(&Html::parse_document(&self.html)))
    }
}
