// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn log_path(&self) -> PathBuf {
        self.store.dir.join(LOG_FILE)
    }
}

/// Where the durable profile record lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub key: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            key: s!(STORAGE_KEY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    /// Parse GUI text into the output directory. Empty text resets to the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }
}
