// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    controller::Controller,
    log,
    status::Status,
    view::View,
};

use super::components;

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    log::init(&state.options.log_path());
    eframe::run_native(
        "LinkedIn Profile Harvester",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // owns the profile store
    pub controller: Controller,

    // transient: reset every time the window opens
    pub status: Option<Status>,
    pub running: bool,
    pub confirm_clear: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let controller = Controller::open(&state.options);
        logf!("Init: profiles={}", controller.store().len());

        Self {
            state,
            controller,
            status: None,
            running: false,
            confirm_clear: false,
        }
    }

    #[inline]
    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    #[inline]
    pub fn view(&self) -> View {
        self.controller.view(self.status.as_ref())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("page_bar").show(ctx, |ui| {
            components::page_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_buttons::draw(ui, self);

            ui.separator();

            components::profile_list::draw(ui, self);
        });

        components::confirm_dialog::draw(ctx, self);
    }
}
