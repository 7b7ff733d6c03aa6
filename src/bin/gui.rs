// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use profile_harvest::{config::{options::AppOptions, state::AppState}, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let state = AppState::new(AppOptions::default());
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
