pub mod account;
pub mod approval;
pub mod booking;
pub mod dashboard;
pub mod employee;

use serde::Deserialize;

/// Generic `{success, message}` reply of the form endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// Only an explicit `success: true` counts.
    pub fn succeeded(&self) -> bool {
        self.success == Some(true)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
