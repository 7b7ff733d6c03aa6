// src/extract.rs
//
// Runs against one page's DOM. Read-only: nothing here touches the document
// beyond selecting elements, and the only thing handed back is a list of
// owned strings.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::canonical;

/// Cheap pre-filter; the patterns in `core::canonical` do the real check.
const PROFILE_LINK_SELECTOR: &str = r#"a[href*="/in/"]"#;

fn selector() -> Option<&'static Selector> {
    static SEL: OnceLock<Option<Selector>> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(PROFILE_LINK_SELECTOR).ok())
        .as_ref()
}

/// Canonical profile URLs found on the page, deduplicated.
/// Ordering is not part of the contract.
pub fn extract_profiles(doc: &Html) -> Vec<String> {
    let Some(sel) = selector() else {
        return Vec::new();
    };

    let found: BTreeSet<String> = doc
        .select(sel)
        .filter_map(profile_from_anchor)
        .collect();

    found.into_iter().collect()
}

/// Convenience for callers holding raw HTML.
pub fn extract_from_html(html: &str) -> Vec<String> {
    extract_profiles(&Html::parse_document(html))
}

/// One anchor → at most one profile. Anything odd about the element is a skip.
fn profile_from_anchor(anchor: ElementRef<'_>) -> Option<String> {
    let href = anchor.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    canonical::canonicalize(href)
}
