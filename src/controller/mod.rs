pub mod account;
pub mod booking;
pub mod dashboard;
pub mod state;

pub use account::AccountForms;
pub use booking::{BookingForm, DateChoice};
pub use dashboard::DashboardPage;
pub use state::{FormPhase, Session, SubmissionGuard};

use chrono::{Local, NaiveDate};
use strum_macros::{AsRefStr, Display};

/// What the page does once an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stay on the page; notices (if any) were already shown.
    Stay,
    /// Refused because a submission from this form is still in flight.
    Busy,
    /// Start over from an empty session; the server now holds the truth.
    Reload,
    Redirect(Page),
}

impl Outcome {
    /// Reloading `page` is the same as navigating to it again.
    pub fn on_page(self, page: Page) -> Outcome {
        match self {
            Outcome::Reload => Outcome::Redirect(page),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum Page {
    #[strum(serialize = "/dashboard")]
    Dashboard,
    #[strum(serialize = "/login")]
    Login,
}

/// Source of "today" for the past-date guard.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A fixed date is its own clock.
impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}
