// src/gui/components/page_bar.rs
//
// Which saved page to scan, where it came from, and where exports go.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &mut app.state.gui;
    let mut open_folder_clicked = false;

    egui::Grid::new("page_bar_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Saved page:");
            if ui
                .add(egui::TextEdit::singleline(&mut gui.page_path_text)
                    .hint_text("path/to/page.html")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY))
                .changed()
            {
                logd!("UI: page_path_text → {}", gui.page_path_text);
            }
            ui.end_row();

            ui.label("Page URL:");
            ui.add(egui::TextEdit::singleline(&mut gui.page_url_text)
                .hint_text("taken from the page when empty")
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY));
            ui.end_row();

            ui.label("Output:");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut gui.out_dir_text)
                    .font(egui::TextStyle::Monospace));
                if ui.button("📁").on_hover_text("Open output folder").clicked() {
                    open_folder_clicked = true;
                }
            });
            ui.end_row();
        });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        let text = app.state.gui.out_dir_text.clone();
        app.state.options.export.set_out_dir(&text);
        let dir = app.state.options.export.out_dir.clone();
        open_output_folder(app, &dir);
    }
}

/// Open the export folder (or its nearest existing parent) in the system file explorer.
fn open_output_folder(app: &mut App, dir: &Path) {
    let folder = find_nearest_existing_parent(dir);

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            loge!("Cannot resolve folder path {}: {}", folder.display(), e);
            app.set_status(crate::status::Status::error(format!("Cannot open folder: {e}")));
            return;
        }
    };

    match open_folder_in_explorer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.set_status(crate::status::Status::error(format!("Failed to open folder: {e}")));
        }
    }
}

fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| !p.as_os_str().is_empty() && p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}
