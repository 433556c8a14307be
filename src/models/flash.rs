#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use serde::{Deserialize, Serialize};

/// One-shot notification the backend attaches to a single page response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flash {
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Flash {
    /// The message to surface, success taking precedence over error.
    /// Blank messages count as absent.
    pub fn message(&self) -> Option<(Severity, &str)> {
        fn present(m: &Option<String>) -> Option<&str> {
            m.as_deref().filter(|s| !s.trim().is_empty())
        }
        present(&self.success)
            .map(|m| (Severity::Success, m))
            .or_else(|| present(&self.error).map(|m| (Severity::Error, m)))
    }

    /// The backend reported a failure and no success.
    pub fn is_failure(&self) -> bool {
        matches!(self.message(), Some((Severity::Error, _)))
    }
}
