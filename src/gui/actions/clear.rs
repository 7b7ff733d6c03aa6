// src/gui/actions/clear.rs
//
// Clear is two-step in the GUI: the button opens the confirmation window,
// and the window's answer finishes the command.

use crate::{controller::MSG_NOTHING_TO_CLEAR, gui::app::App, host::AlwaysConfirm, status::Status};

pub fn clear(app: &mut App) {
    if app.controller.store().is_empty() {
        logd!("Clear: Clicked, but there's nothing to clear");
        app.set_status(Status::info(MSG_NOTHING_TO_CLEAR));
        return;
    }
    app.confirm_clear = true;
}

pub fn clear_confirmed(app: &mut App) {
    app.confirm_clear = false;
    if let Some(status) = app.controller.clear(&mut AlwaysConfirm) {
        app.set_status(status);
    }
}

/// Declining leaves both the store and the status line alone.
pub fn clear_declined(app: &mut App) {
    logd!("Clear: Declined");
    app.confirm_clear = false;
}
