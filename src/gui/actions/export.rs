// src/gui/actions/export.rs
use crate::{gui::app::App, host::DirSaver};

pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before the controller borrow
    let text = app.state.gui.out_dir_text.clone();
    app.state.options.export.set_out_dir(&text);

    let mut saver = DirSaver::new(&app.state.options.export.out_dir);
    logf!("Export: Clicked out_dir={}", saver.dir().display());

    let status = app.controller.export(&mut saver);
    app.set_status(status);
}
