// src/gui/actions/extract.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    host::SavedPageHost,
};

pub fn extract(app: &mut App) {
    let path = s!(app.state.gui.page_path_text.trim());
    let url = s!(app.state.gui.page_url_text.trim());
    logf!("Extract: Clicked page={:?} url_override={:?}", path, url);

    let mut host = SavedPageHost::new(path, Some(url));

    let App { controller, status, running, .. } = app;
    let result = {
        let mut prog = GuiProgress::new(status, running);
        controller.extract(&mut host, &mut prog)
    };
    *status = Some(result);
}
