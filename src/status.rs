// src/status.rs
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Tag used for styling and the CLI prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Transient message from the last command. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.as_str(), self.message)
    }
}
