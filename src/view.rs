// src/view.rs
//
// Pure projection of store contents + the last status. Frontends redraw
// from a fresh `View` after every command; nothing here is kept between refreshes.

use std::fmt::Write;

use crate::status::Status;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// 1-based position in the sorted list
    pub number: usize,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub status: Option<Status>,
    pub entries: Vec<Entry>,
}

impl View {
    /// `snapshot` is sorted again here so the order never depends on the caller.
    pub fn project(snapshot: &[String], status: Option<&Status>) -> Self {
        let mut sorted = snapshot.to_vec();
        sorted.sort();
        sorted.dedup();

        let entries = sorted
            .into_iter()
            .enumerate()
            .map(|(i, url)| Entry { number: i + 1, url })
            .collect();

        Self { status: status.cloned(), entries }
    }

    /// The list section is hidden entirely when there's nothing in it.
    pub fn show_list(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn list_title(&self) -> String {
        format!("Saved profiles ({})", self.count())
    }

    /// Plain-text rendering for the CLI.
    pub fn render_text(&self) -> String {
        let mut out = s!();
        if let Some(st) = &self.status {
            let _ = writeln!(out, "{st}");
        }
        if self.show_list() {
            let width = self.count().to_string().len();
            let _ = writeln!(out, "{}", self.list_title());
            for e in &self.entries {
                let _ = writeln!(out, "{:>width$}. {}", e.number, e.url);
            }
        }
        out
    }
}
