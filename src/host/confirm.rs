// src/host/confirm.rs

/// Blocking yes/no prompt shown before destructive commands.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers yes without asking (`--yes`, or a dialog already accepted).
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
