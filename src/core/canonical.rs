// src/core/canonical.rs
//
// Profile link patterns and the canonical URL form.
// Usernames are a maximal run of anything except '/', '?' and '#';
// the `+` quantifier means an empty segment never matches.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::consts::{CANONICAL_PREFIX, TARGET_DOMAIN};

/// Tried in order; the first pattern that matches wins.
const PATTERNS: [&str; 2] = [
    r"linkedin\.com/in/([^/?#]+)", // full host
    r"/in/([^/?#]+)",              // path only
];

fn patterns() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Pull the username out of a raw link reference.
pub fn username(reference: &str) -> Option<&str> {
    patterns()
        .iter()
        .find_map(|re| re.captures(reference))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rebuild `https://www.linkedin.com/in/<username>` from any reference form.
/// Scheme, subdomain, trailing path, query and fragment are all dropped.
pub fn canonicalize(reference: &str) -> Option<String> {
    username(reference).map(|name| join!(CANONICAL_PREFIX, name))
}

/// Whether a page location belongs to the target site.
pub fn is_target_site(location: &str) -> bool {
    let Ok(url) = Url::parse(location.trim()) else {
        return false;
    };
    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host == TARGET_DOMAIN || host.ends_with(&join!(".", TARGET_DOMAIN))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_host_form_drops_query() {
        assert_eq!(
            canonicalize("https://de.linkedin.com/in/alice123?trk=x").as_deref(),
            Some("https://www.linkedin.com/in/alice123")
        );
    }

    #[test]
    fn path_only_form_drops_fragment_and_trailing_segments() {
        assert_eq!(
            canonicalize("/in/zed#sec").as_deref(),
            Some("https://www.linkedin.com/in/zed")
        );
        assert_eq!(
            canonicalize("/in/zed/details/experience/").as_deref(),
            Some("https://www.linkedin.com/in/zed")
        );
    }

    #[test]
    fn empty_username_never_matches() {
        assert_eq!(canonicalize("/in/"), None);
        assert_eq!(canonicalize("https://www.linkedin.com/in//"), None);
        assert_eq!(canonicalize("/in/?x=1"), None);
    }

    #[test]
    fn canonical_form_is_a_fixed_point() {
        let once = canonicalize("http://linkedin.com/in/bob/").unwrap();
        assert_eq!(canonicalize(&once).as_deref(), Some(once.as_str()));
    }

    #[test]
    fn unrelated_links_contribute_nothing() {
        assert_eq!(canonicalize("https://example.com/company/acme"), None);
        assert_eq!(canonicalize("/feed/"), None);
    }

    #[test]
    fn target_site_hosts() {
        assert!(is_target_site("https://www.linkedin.com/search/results/people/"));
        assert!(is_target_site("https://linkedin.com/in/amy"));
        assert!(!is_target_site("https://notlinkedin.com/in/amy"));
        assert!(!is_target_site("https://example.com/?next=linkedin.com"));
        assert!(!is_target_site(""));
    }
}
