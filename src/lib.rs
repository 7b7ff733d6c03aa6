// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod host;

pub mod controller;
pub mod csv;
pub mod export;
pub mod extract;
pub mod gui;
pub mod progress;
pub mod status;
pub mod store;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;
