// src/host/mod.rs
//
// Everything the core needs from its surroundings, behind traits:
// the active page, durable key-value storage, file saving, and yes/no prompts.

pub mod confirm;
pub mod download;
pub mod page;
pub mod storage;

pub use confirm::{AlwaysConfirm, Confirm};
pub use download::{DirSaver, FileSaver};
pub use page::{InlinePageHost, PageContext, PageHost, PageScript, SavedPageHost};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
