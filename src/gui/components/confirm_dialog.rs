// src/gui/components/confirm_dialog.rs

use eframe::egui::{self, Align2};

use crate::{controller::clear_prompt, gui::{actions, app::App}};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.confirm_clear {
        return;
    }

    let prompt = clear_prompt(app.controller.store().len());
    let mut answer: Option<bool> = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&prompt);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() { answer = Some(true); }
                if ui.button("No").clicked() { answer = Some(false); }
            });
        });

    match answer {
        Some(true) => actions::clear_confirmed(app),
        Some(false) => actions::clear_declined(app),
        None => {}
    }
}
