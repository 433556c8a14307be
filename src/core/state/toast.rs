#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

use crate::models::{Flash, Severity};

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

/// Single notification slot. A new toast replaces the visible one at once;
/// nothing is queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
}

impl ToastState {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show `toast`, returning the id its expiry timer must present.
    pub fn show(&mut self, toast: Toast) -> Uuid {
        let id = toast.id;
        self.current = Some(toast);
        id
    }

    pub fn show_flash(&mut self, flash: &Flash) -> Option<Uuid> {
        let (severity, message) = flash.message()?;
        Some(self.show(Toast::new(severity, message)))
    }

    /// Hide the toast if `id` is still the one showing. Returns whether it hid.
    pub fn expire(&mut self, id: Uuid) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
