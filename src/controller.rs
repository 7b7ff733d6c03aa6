// src/controller.rs
//
// One method per user command. Each returns the status line to show; the
// store is only touched on the success paths.
//
// Commands take `&mut self`, so two can never overlap on the same
// controller.

use chrono::{DateTime, Utc};

use crate::{
    config::options::AppOptions,
    core::canonical::is_target_site,
    export,
    extract::extract_profiles,
    host::{Confirm, FileSaver, JsonFileStore, PageHost},
    progress::Progress,
    status::Status,
    store::ProfileStore,
    view::View,
};

pub const MSG_BUSY: &str = "Extracting profiles...";
pub const MSG_WRONG_PAGE: &str = "Please open a LinkedIn page first";
pub const MSG_NONE_FOUND: &str = "No LinkedIn profiles found on this page";
pub const MSG_NOTHING_TO_EXPORT: &str = "No profiles to export";
pub const MSG_NOTHING_TO_CLEAR: &str = "No profiles to clear";
pub const MSG_CLEARED: &str = "All profiles cleared";

pub struct Controller {
    store: ProfileStore,
}

impl Controller {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// File-backed controller for `options`, with the persisted record loaded.
    /// A storage error is logged and leaves the store empty.
    pub fn open(options: &AppOptions) -> Self {
        let storage = JsonFileStore::new(&options.store.dir);
        let mut store = ProfileStore::new(Box::new(storage), options.store.key.clone());
        match store.load() {
            Ok(n) => logf!("Cache: Loaded {} profile(s) from {}", n, options.store.dir.display()),
            Err(e) => loge!("Cache: Load failed: {}", e),
        }
        Self::new(store)
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Idle → Running → (merge + save | report) → Idle.
    pub fn extract(&mut self, host: &mut dyn PageHost, progress: &mut dyn Progress) -> Status {
        progress.begin();
        progress.status(&Status::info(MSG_BUSY));

        let status = self.run_extract(host);
        progress.finish();
        status
    }

    fn run_extract(&mut self, host: &mut dyn PageHost) -> Status {
        let page = match host.active_page() {
            Ok(Some(page)) => page,
            Ok(None) => {
                logd!("Extract: No active page");
                return Status::info(MSG_WRONG_PAGE);
            }
            Err(e) => {
                loge!("Extract: Active page query failed: {}", e);
                return Status::error(format!("Error: {e}"));
            }
        };

        if !is_target_site(&page.url) {
            logd!("Extract: Not a target page url={:?}", page.url);
            return Status::info(MSG_WRONG_PAGE);
        }

        logf!("Extract: Begin page={} url={}", page.id, page.url);

        let found = match host.run_in_page(page.id, extract_profiles) {
            Ok(found) => found,
            Err(e) => {
                loge!("Extract: Page script failed: {}", e);
                return Status::error(format!("Error: {e}"));
            }
        };

        if found.is_empty() {
            logd!("Extract: Nothing found on page={}", page.id);
            return Status::info(MSG_NONE_FOUND);
        }

        let outcome = self.store.merge(found);
        self.persist();

        logf!(
            "Extract: OK seen={} new={} total={}",
            outcome.seen,
            outcome.added,
            self.store.len()
        );
        Status::success(format!(
            "Found {} profiles ({} new, {} duplicates)",
            outcome.seen,
            outcome.added,
            outcome.duplicates()
        ))
    }

    pub fn export(&self, saver: &mut dyn FileSaver) -> Status {
        self.export_at(saver, Utc::now())
    }

    /// Export with an explicit clock, so the filename is predictable.
    pub fn export_at(&self, saver: &mut dyn FileSaver, now: DateTime<Utc>) -> Status {
        if self.store.is_empty() {
            logd!("Export: Clicked, but there's nothing to export");
            return Status::info(MSG_NOTHING_TO_EXPORT);
        }

        let snapshot = self.store.snapshot();
        match export::export_snapshot(&snapshot, saver, now) {
            Ok(done) => {
                logf!("Export: OK count={} path={}", done.count, done.path.display());
                Status::success(format!("Exported {} profiles to {}", done.count, done.filename))
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                Status::error(format!("Error: {e}"))
            }
        }
    }

    /// `None` when the user declines: nothing changes, not even the status.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> Option<Status> {
        if self.store.is_empty() {
            logd!("Clear: Clicked, but there's nothing to clear");
            return Some(Status::info(MSG_NOTHING_TO_CLEAR));
        }

        let prompt = clear_prompt(self.store.len());
        if !confirm.confirm(&prompt) {
            logd!("Clear: Declined");
            return None;
        }

        let count = self.store.len();
        if let Err(e) = self.store.clear() {
            loge!("Cache: Remove failed: {}", e);
        }
        logf!("Clear: Removed {} profile(s)", count);
        Some(Status::success(MSG_CLEARED))
    }

    /// Current projection for rendering.
    pub fn view(&self, status: Option<&Status>) -> View {
        View::project(&self.store.snapshot(), status)
    }

    fn persist(&mut self) {
        match self.store.save() {
            Ok(()) => logd!("Cache: Saved {} profile(s)", self.store.len()),
            Err(e) => loge!("Cache: Save failed: {}", e),
        }
    }
}

pub fn clear_prompt(count: usize) -> String {
    format!("Clear all {count} saved profiles?")
}
