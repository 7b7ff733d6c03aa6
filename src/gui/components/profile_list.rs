// src/gui/components/profile_list.rs
//
// Numbered, sorted list of saved profiles. Hidden when the store is empty.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let view = app.view();
    if !view.show_list() {
        return;
    }

    ui.heading(view.list_title());

    let avail_h = ui.available_height();
    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .column(Column::auto().at_least(32.0))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.label(RichText::new("#").strong()); });
            header.col(|ui| { ui.label(RichText::new("Profile URL").strong()); });
        })
        .body(|body| {
            body.rows(20.0, view.entries.len(), |mut row| {
                let Some(entry) = view.entries.get(row.index()) else { return };
                row.col(|ui| { ui.label(entry.number.to_string()); });
                row.col(|ui| {
                    ui.add(egui::Label::new(
                        RichText::new(&entry.url).monospace()).selectable(true));
                });
            });
        });
}
