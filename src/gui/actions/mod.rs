// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{extract,export,clear}.

mod clear;   // src/gui/actions/clear.rs
mod export;  // src/gui/actions/export.rs
mod extract; // src/gui/actions/extract.rs

pub use clear::{clear, clear_confirmed, clear_declined};
pub use export::export;
pub use extract::extract;
