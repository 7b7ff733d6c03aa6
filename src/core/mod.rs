// src/core/mod.rs

pub mod canonical;
pub mod sanitize;
