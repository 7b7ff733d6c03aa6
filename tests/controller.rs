// tests/controller.rs
use std::path::PathBuf;

use chrono::{TimeZone, Utc};

use profile_harvest::config::options::AppOptions;
use profile_harvest::controller::{self, Controller};
use profile_harvest::error::{ExportError, HostError};
use profile_harvest::host::{
    AlwaysConfirm, DirSaver, FileSaver, InlinePageHost, KeyValueStore, MemoryStore, PageContext, PageHost,
    PageScript, SavedPageHost,
};
use profile_harvest::progress::{NullProgress, Progress};
use profile_harvest::status::{Severity, Status};
use profile_harvest::store::ProfileStore;

const PAGE_URL: &str = "https://www.linkedin.com/search/results/people/";
const PAGE: &str = r#"
    <a href="/in/zed">Zed</a>
    <a href="/in/amy?x=1">Amy</a>
    <a href="/in/zed#sec">Zed again</a>
"#;

fn controller() -> Controller {
    Controller::new(ProfileStore::new(Box::new(MemoryStore::new()), "linkedinProfiles"))
}

fn page(html: &str) -> InlinePageHost {
    InlinePageHost::new(Some(PAGE_URL.into()), html)
}

/// Records the hook calls the controller makes.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self) { self.events.push("begin".into()); }
    fn status(&mut self, status: &Status) { self.events.push(status.message.clone()); }
    fn finish(&mut self) { self.events.push("finish".into()); }
}

/// Host whose page script never gets to run.
struct BrokenHost;

impl PageHost for BrokenHost {
    fn active_page(&mut self) -> Result<Option<PageContext>, HostError> {
        Ok(Some(PageContext { id: 7, url: PAGE_URL.into() }))
    }
    fn run_in_page(&mut self, page_id: u32, _script: PageScript) -> Result<Vec<String>, HostError> {
        Err(HostError::PageGone(page_id))
    }
}

/// Saver that remembers what it was handed.
#[derive(Default)]
struct Captured {
    files: Vec<(String, String)>,
}

impl FileSaver for Captured {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        self.files.push((filename.into(), String::from_utf8_lossy(bytes).into_owned()));
        Ok(PathBuf::from(filename))
    }
}

#[test]
fn extract_merges_and_reports_counts() {
    let mut c = controller();
    let st = c.extract(&mut page(PAGE), &mut NullProgress);
    assert_eq!(st.severity, Severity::Success);
    assert_eq!(st.message, "Found 2 profiles (2 new, 0 duplicates)");
    assert_eq!(c.store().len(), 2);

    let st = c.extract(&mut page(r#"<a href="/in/amy">a</a><a href="/in/bo">b</a>"#), &mut NullProgress);
    assert_eq!(st.message, "Found 2 profiles (1 new, 1 duplicates)");
    assert_eq!(c.store().len(), 3);
}

#[test]
fn extract_persists_after_merge() {
    let mut c = controller();
    c.extract(&mut page(PAGE), &mut NullProgress);
    let saved = c.store().storage().get("linkedinProfiles").unwrap().unwrap();
    assert_eq!(
        saved,
        serde_json::json!(["https://www.linkedin.com/in/amy", "https://www.linkedin.com/in/zed"])
    );
}

#[test]
fn extract_drives_progress_hooks_in_order() {
    let mut c = controller();
    let mut rec = Recorder::default();
    c.extract(&mut page(PAGE), &mut rec);
    assert_eq!(rec.events, vec!["begin", controller::MSG_BUSY, "finish"]);

    // finish runs on failure too
    let mut rec = Recorder::default();
    c.extract(&mut BrokenHost, &mut rec);
    assert_eq!(rec.events.last().map(String::as_str), Some("finish"));
}

#[test]
fn wrong_site_is_rejected_before_running() {
    let mut c = controller();
    let mut host = InlinePageHost::new(Some("https://example.com/people".into()), PAGE);
    let st = c.extract(&mut host, &mut NullProgress);
    assert_eq!(st, Status::info(controller::MSG_WRONG_PAGE));
    assert!(c.store().is_empty());
}

#[test]
fn missing_page_is_rejected() {
    let mut c = controller();
    let mut host = InlinePageHost::new(None, PAGE);
    assert_eq!(c.extract(&mut host, &mut NullProgress).message, controller::MSG_WRONG_PAGE);

    let mut host = SavedPageHost::new("", None);
    assert_eq!(c.extract(&mut host, &mut NullProgress).message, controller::MSG_WRONG_PAGE);
}

#[test]
fn zero_results_is_informational_and_not_merged() {
    let mut c = controller();
    let st = c.extract(&mut page("<p>nobody here</p>"), &mut NullProgress);
    assert_eq!(st, Status::info(controller::MSG_NONE_FOUND));
    assert!(c.store().is_empty());
}

#[test]
fn host_failure_reports_error_and_leaves_store() {
    let mut c = controller();
    c.extract(&mut page(PAGE), &mut NullProgress);
    let st = c.extract(&mut BrokenHost, &mut NullProgress);
    assert_eq!(st.severity, Severity::Error);
    assert!(st.message.starts_with("Error: "));
    assert_eq!(c.store().len(), 2);
}

#[test]
fn unreadable_saved_page_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut c = controller();
    let mut host = SavedPageHost::new(dir.path().join("missing.html"), None);
    let st = c.extract(&mut host, &mut NullProgress);
    assert_eq!(st.severity, Severity::Error);
}

#[test]
fn saved_page_location_comes_from_canonical_link() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("page.html");
    std::fs::write(
        &file,
        format!(r#"<html><head><link rel="canonical" href="{PAGE_URL}"></head><body>{PAGE}</body></html>"#),
    )
    .unwrap();

    let mut c = controller();
    let st = c.extract(&mut SavedPageHost::new(&file, None), &mut NullProgress);
    assert_eq!(st.severity, Severity::Success);
    assert_eq!(c.store().len(), 2);
}

#[test]
fn persistence_failure_does_not_fail_extract() {
    let mut c = Controller::new(ProfileStore::new(Box::new(MemoryStore::failing()), "k"));
    let st = c.extract(&mut page(PAGE), &mut NullProgress);
    assert_eq!(st.severity, Severity::Success);
    assert_eq!(c.store().len(), 2);
}

#[test]
fn export_on_empty_store_is_a_noop() {
    let c = controller();
    let mut saver = Captured::default();
    assert_eq!(c.export(&mut saver), Status::info(controller::MSG_NOTHING_TO_EXPORT));
    assert!(saver.files.is_empty());
}

#[test]
fn export_hands_sorted_csv_to_saver() {
    let mut c = controller();
    c.extract(&mut page(PAGE), &mut NullProgress);

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 3).unwrap();
    let mut saver = Captured::default();
    let st = c.export_at(&mut saver, now);

    assert_eq!(
        st,
        Status::success("Exported 2 profiles to linkedin_profiles_2026-10-19T08-05-03.csv")
    );
    let (name, body) = &saver.files[0];
    assert_eq!(name, "linkedin_profiles_2026-10-19T08-05-03.csv");
    assert_eq!(
        body,
        "Profile URL\nhttps://www.linkedin.com/in/amy\nhttps://www.linkedin.com/in/zed"
    );
}

#[test]
fn export_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    std::fs::write(&blocker, "a file, not a dir").unwrap();

    let mut c = controller();
    c.extract(&mut page(PAGE), &mut NullProgress);
    let st = c.export(&mut DirSaver::new(&blocker));
    assert_eq!(st.severity, Severity::Error);
}

#[test]
fn clear_requires_confirmation() {
    let mut c = controller();
    c.extract(&mut page(PAGE), &mut NullProgress);

    let mut asked = None;
    let declined = c.clear(&mut |prompt: &str| {
        asked = Some(prompt.to_string());
        false
    });
    assert_eq!(declined, None);
    assert_eq!(asked.as_deref(), Some("Clear all 2 saved profiles?"));
    assert_eq!(c.store().len(), 2);

    let st = c.clear(&mut AlwaysConfirm);
    assert_eq!(st, Some(Status::success(controller::MSG_CLEARED)));
    assert!(c.store().is_empty());
    assert!(c.store().storage().get("linkedinProfiles").unwrap().is_none());
}

#[test]
fn clear_on_empty_store_never_prompts() {
    let mut c = controller();
    let st = c.clear(&mut |_: &str| -> bool { panic!("should not prompt") });
    assert_eq!(st, Some(Status::info(controller::MSG_NOTHING_TO_CLEAR)));
}

#[test]
fn view_projects_sorted_numbered_list() {
    let mut c = controller();
    let empty = c.view(None);
    assert!(!empty.show_list());

    let st = c.extract(&mut page(PAGE), &mut NullProgress);
    let view = c.view(Some(&st));
    assert!(view.show_list());
    assert_eq!(view.entries[0].number, 1);
    assert_eq!(view.entries[0].url, "https://www.linkedin.com/in/amy");
    assert_eq!(view.entries[1].url, "https://www.linkedin.com/in/zed");
    assert_eq!(view.status, Some(st));
}

#[test]
fn saved_page_with_invalid_utf8_still_extracts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.html");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(br#"<html><head><link rel="canonical" href="https://www.linkedin.com/feed/"></head>"#);
    bytes.extend_from_slice(b"<body><p>caf\xE9</p>");
    bytes.extend_from_slice(br#"<a href="/in/amy">Amy</a></body></html>"#);
    std::fs::write(&path, &bytes).unwrap();

    let mut c = controller();
    let st = c.extract(&mut SavedPageHost::new(&path, None), &mut NullProgress);
    assert_eq!(st.severity, Severity::Success);
    assert!(c.store().contains("https://www.linkedin.com/in/amy"));
}

#[test]
fn open_with_corrupt_record_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("linkedinProfiles.json"), "{not json").unwrap();

    let mut opts = AppOptions::default();
    opts.store.dir = dir.path().to_path_buf();
    let c = Controller::open(&opts);
    assert!(c.store().is_empty());
}
