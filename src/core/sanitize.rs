// src/core/sanitize.rs

use chrono::{DateTime, Utc};

/// ISO-8601 timestamp with ':' and '.' replaced by '-', truncated to whole seconds.
/// e.g. `2026-10-19T13-50-07`
pub fn filename_timestamp(now: DateTime<Utc>) -> String {
    let iso = now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let safe: String = iso
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    safe.chars().take(19).collect()
}

/// Keep a user-facing filename free of path separators.
pub fn strip_separators(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_filesystem_safe_and_truncated() {
        let t = Utc.with_ymd_and_hms(2026, 10, 19, 13, 50, 7).unwrap();
        assert_eq!(filename_timestamp(t), "2026-10-19T13-50-07");
    }

    #[test]
    fn separators_replaced() {
        assert_eq!(strip_separators("a/b\\c.csv"), "a_b_c.csv");
    }
}
