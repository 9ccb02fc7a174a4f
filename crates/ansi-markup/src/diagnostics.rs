//! Warning sinks for configuration parsing.

use std::cell::RefCell;

/// Receives non-fatal warnings raised while a [`StyleTable`](crate::StyleTable)
/// is being built.
pub trait Diagnostics {
    /// Reports a warning.
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: "ansi_markup", "{}", message);
    }
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectDiagnostics {
    messages: RefCell<Vec<String>>,
}

impl CollectDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the warnings received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Diagnostics for CollectDiagnostics {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
