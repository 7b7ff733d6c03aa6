// src/gui/components/action_buttons.rs

use eframe::egui::{self, Color32, RichText, widgets::Spinner};

use crate::{gui::{actions, app::App}, status::Severity};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // Extract
        let blue = Color32::from_rgb(10, 102, 194);
        let button_extract = ui.add_enabled(
            !app.running,
            egui::Button::new(
                RichText::new("EXTRACT")
                .color(Color32::WHITE)
                .strong())
            .fill(blue));

        if button_extract.clicked() {
            actions::extract(app);
        }

        // Export
        if ui.button("Export CSV").clicked() {
            actions::export(app);
        }

        // Clear
        if ui.button("Clear").clicked() {
            actions::clear(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        if let Some(status) = &app.status {
            ui.colored_label(severity_color(status.severity), &status.message);
        }
    });
}

fn severity_color(sev: Severity) -> Color32 {
    match sev {
        Severity::Info => Color32::from_rgb(90, 110, 140),
        Severity::Success => Color32::from_rgb(30, 140, 60),
        Severity::Error => Color32::from_rgb(200, 40, 40),
    }
}
