// src/gui/progress.rs
use crate::{progress::Progress, status::Status};

/// Mirrors extraction progress into the app's status line and trigger state.
pub struct GuiProgress<'a> {
    status: &'a mut Option<Status>,
    running: &'a mut bool,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut Option<Status>, running: &'a mut bool) -> Self {
        Self { status, running }
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self) {
        *self.running = true;
    }
    fn status(&mut self, status: &Status) {
        *self.status = Some(status.clone());
    }
    fn finish(&mut self) {
        *self.running = false;
    }
}
