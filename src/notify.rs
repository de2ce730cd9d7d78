//! Popups and dialogs, injected into the controllers.
//!
//! The browser build drove a dialog library directly; here every popup goes
//! through [`Notifier`], so controllers can run against a recording fake in
//! tests and against the terminal in the binary.

use strum_macros::{AsRefStr, Display};

use crate::model::booking::ConflictDetails;
use crate::utils::dates::display_wire;

pub const ATTENTION: &str = "Attention";
pub const ERROR: &str = "Error";
pub const SUCCESS: &str = "Success!";
pub const INFORMATION: &str = "Information";
pub const CONFIRMATION: &str = "Confirmation";
pub const CONFLICT: &str = "Scheduling conflict";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Notifier {
    /// Shows a dismissable notice that closes by itself.
    fn notify(&self, level: Level, title: &str, text: &str);

    /// Yes/no question, `true` when the user confirms.
    fn confirm(&self, title: &str, text: &str) -> bool;

    fn info(&self, title: &str, text: &str) {
        self.notify(Level::Info, title, text);
    }

    fn success(&self, title: &str, text: &str) {
        self.notify(Level::Success, title, text);
    }

    fn warn(&self, title: &str, text: &str) {
        self.notify(Level::Warning, title, text);
    }

    fn error(&self, title: &str, text: &str) {
        self.notify(Level::Error, title, text);
    }

    /// Opens the conflict dialog. The user answers through
    /// `request_approval` or `pick_another_date` on the form.
    fn conflict(&self, details: &ConflictDetails) {
        self.warn(CONFLICT, &conflict_message(details));
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, level: Level, title: &str, text: &str) {
        (**self).notify(level, title, text);
    }

    fn confirm(&self, title: &str, text: &str) -> bool {
        (**self).confirm(title, text)
    }

    fn conflict(&self, details: &ConflictDetails) {
        (**self).conflict(details);
    }
}

pub fn conflict_message(details: &ConflictDetails) -> String {
    format!(
        "Conflict: {} is already scheduled from {}. Return: {}. A request will be sent to the supervisor.",
        details.name,
        display_wire(&details.start_date),
        display_wire(&details.return_date)
    )
}
