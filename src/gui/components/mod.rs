// src/gui/components/mod.rs
pub mod action_buttons;
pub mod confirm_dialog;
pub mod page_bar;
pub mod profile_list;
