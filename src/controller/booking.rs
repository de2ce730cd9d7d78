use chrono::NaiveDate;
use tracing::{debug, error, info, instrument, warn};

use crate::api::BookingApi;
use crate::controller::{Clock, FormPhase, LocalClock, Outcome, Session};
use crate::error::{ClientError, ClientResult};
use crate::model::approval::PendingConflict;
use crate::model::booking::{BookingRequest, ExistingBooking, SubmitReply};
use crate::model::employee::{Badge, EmployeeRecord};
use crate::notify::{self, Notifier};
use crate::utils::dates::{self, to_display};
use crate::view::BookingListView;

/// Start date and length typed into the date form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateChoice {
    pub start_date: NaiveDate,
    pub days: u32,
}

impl DateChoice {
    pub fn new(start_date: NaiveDate, days: u32) -> ClientResult<Self> {
        if days == 0 {
            return Err(ClientError::validation(
                "The number of vacation days must be a positive integer.",
            ));
        }
        Ok(Self { start_date, days })
    }

    /// Parses the raw form fields (`YYYY-MM-DD`, day count).
    pub fn parse(start_date: &str, days: &str) -> ClientResult<Self> {
        let start_date = dates::parse_wire(start_date)?;
        let days = days.trim().parse().map_err(|_| {
            ClientError::validation("The number of vacation days must be a positive integer.")
        })?;
        Self::new(start_date, days)
    }
}

/// The vacation request form: badge lookup, date choice, submission and
/// conflict resolution.
pub struct BookingForm<A, N, C = LocalClock> {
    api: A,
    notifier: N,
    clock: C,
    session: Session,
}

impl<A, N> BookingForm<A, N, LocalClock>
where
    A: BookingApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self::with_clock(api, notifier, LocalClock)
    }
}

impl<A, N, C> BookingForm<A, N, C>
where
    A: BookingApi,
    N: Notifier,
    C: Clock,
{
    pub fn with_clock(api: A, notifier: N, clock: C) -> Self {
        Self {
            api,
            notifier,
            clock,
            session: Session::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn phase(&self) -> FormPhase {
        self.session.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.session.is_submitting()
    }

    pub fn employee(&self) -> Option<EmployeeRecord> {
        self.session.employee()
    }

    pub fn existing_booking(&self) -> Option<ExistingBooking> {
        self.session.existing()
    }

    /// Alter and cancel are only offered on an existing booking.
    pub fn can_modify(&self) -> bool {
        self.session.existing().is_some()
    }

    pub fn pending_conflict(&self) -> Option<PendingConflict> {
        self.session.pending_conflict()
    }

    /// `Name: .. | Department: ..`, plus the scheduled period when there is one.
    pub fn employee_summary(&self) -> Option<String> {
        let employee = self.session.employee()?;
        let mut summary = format!("Name: {} | Department: {}", employee.name, employee.department);
        if let Some(existing) = self.session.existing() {
            summary.push_str(&format!(
                " - Vacation scheduled for: {} - Return: {}",
                to_display(existing.start_date),
                to_display(existing.return_date)
            ));
        }
        Some(summary)
    }

    /// The booking list once it has loaded, highlighted for the current employee.
    pub fn booking_list(&self) -> Option<BookingListView> {
        let rows = self.session.bookings()?;
        let employee = self.session.employee();
        Some(BookingListView::render(
            &rows,
            employee.as_ref().map(|e| e.department.as_str()),
        ))
    }

    #[instrument(name = "badge_lookup", skip(self, raw_badge), fields(badge = %raw_badge.trim()))]
    pub async fn lookup(&self, raw_badge: &str) -> Outcome {
        let Some(badge) = Badge::parse(raw_badge) else {
            self.notifier.warn(notify::ATTENTION, "Please enter your badge.");
            return Outcome::Stay;
        };

        info!("Employee lookup started");
        let prior = self.session.begin_lookup();

        match self.api.find_employee(&badge).await {
            Ok(Some(employee)) => {
                debug!(department = %employee.department, "Employee found");
                self.session.set_employee(employee);
                // independent of each other, each one updates the page when it lands
                futures::join!(self.refresh_existing(&badge), self.refresh_bookings());
            }
            Ok(None) => {
                warn!("Employee not found");
                self.session.clear_employee();
                self.notifier.warn(notify::ATTENTION, "Employee not found.");
            }
            Err(e) => {
                error!(error = %e, "Employee lookup failed");
                self.session.set_phase(prior);
                self.notifier.error(notify::ERROR, &e.to_string());
            }
        }
        Outcome::Stay
    }

    async fn refresh_existing(&self, badge: &Badge) {
        match self.api.check_booking(badge).await {
            // a later lookup may have replaced the employee meanwhile
            Ok(existing) if self.session.is_current(badge) => {
                debug!(scheduled = existing.is_some(), "Booking check done");
                self.session.set_existing(existing);
            }
            Ok(_) => debug!("Dropping booking check for a replaced employee"),
            Err(e) => {
                error!(error = %e, "Booking check failed");
                self.notifier.error(notify::ERROR, &e.to_string());
            }
        }
    }

    async fn refresh_bookings(&self) {
        match self.api.list_bookings().await {
            Ok(rows) => {
                debug!(count = rows.len(), "Booking list loaded");
                self.session.set_bookings(rows);
            }
            Err(e) => {
                error!(error = %e, "Listing bookings failed");
                self.notifier.error(notify::ERROR, &e.to_string());
            }
        }
    }

    /// Books a new vacation for the employee looked up last.
    #[instrument(name = "submit_booking", skip(self), fields(start = %choice.start_date, days = choice.days))]
    pub async fn submit(&self, choice: DateChoice) -> Outcome {
        let Some(employee) = self.session.employee() else {
            self.notifier.warn(notify::ATTENTION, "Look up your badge first.");
            return Outcome::Stay;
        };
        if self.conflict_open() {
            return Outcome::Stay;
        }
        let Some(_guard) = self.session.try_lock() else {
            debug!("Submission already in flight");
            return Outcome::Busy;
        };

        let return_date = match self.check_dates(&choice) {
            Ok(date) => date,
            Err(e) => {
                info!(reason = %e, "Booking rejected before sending");
                self.notifier.warn(notify::ATTENTION, &e.to_string());
                return Outcome::Stay;
            }
        };

        let question = format!(
            "You chose {} as start date for {} days. Return date: {}. Confirm?",
            to_display(choice.start_date),
            choice.days,
            to_display(return_date)
        );
        if !self.notifier.confirm(notify::CONFIRMATION, &question) {
            debug!("Booking not confirmed");
            return Outcome::Stay;
        }

        let request = BookingRequest {
            badge: employee.badge,
            start_date: choice.start_date,
            days: choice.days,
        };
        info!(return_date = %return_date, "Submitting booking");
        self.session.set_phase(FormPhase::Submitting);
        let reply = self.api.submit_booking(&request).await;
        self.settle(request, reply)
    }

    /// Moves the existing booking to new dates; same conflict handling as `submit`.
    #[instrument(name = "alter_booking", skip(self), fields(start = %choice.start_date, days = choice.days))]
    pub async fn alter(&self, choice: DateChoice) -> Outcome {
        let Some(employee) = self.session.employee() else {
            self.notifier.warn(notify::ATTENTION, "Look up your badge first.");
            return Outcome::Stay;
        };
        if !self.can_modify() {
            self.notifier.warn(notify::ATTENTION, "There is no booking to alter.");
            return Outcome::Stay;
        }
        if self.conflict_open() {
            return Outcome::Stay;
        }
        let Some(_guard) = self.session.try_lock() else {
            debug!("Submission already in flight");
            return Outcome::Busy;
        };

        if let Err(e) = self.check_dates(&choice) {
            info!(reason = %e, "Alteration rejected before sending");
            self.notifier.warn(notify::ATTENTION, &e.to_string());
            return Outcome::Stay;
        }

        let request = BookingRequest {
            badge: employee.badge,
            start_date: choice.start_date,
            days: choice.days,
        };
        info!("Altering booking");
        self.session.set_phase(FormPhase::Submitting);
        let reply = self.api.alter_booking(&request).await;
        self.settle(request, reply)
    }

    #[instrument(name = "cancel_booking", skip(self))]
    pub async fn cancel(&self) -> Outcome {
        let Some(employee) = self.session.employee() else {
            self.notifier.warn(notify::ATTENTION, "Look up your badge first.");
            return Outcome::Stay;
        };
        if !self.can_modify() {
            self.notifier.warn(notify::ATTENTION, "There is no booking to cancel.");
            return Outcome::Stay;
        }

        info!(badge = %employee.badge, "Cancelling booking");
        match self.api.cancel_booking(&employee.badge).await {
            Ok(ack) => {
                self.notifier
                    .info(notify::INFORMATION, &ack.message_or("Booking cancelled."));
                self.reload()
            }
            Err(e) => {
                error!(error = %e, "Cancelling booking failed");
                self.notifier.error(notify::ERROR, &e.to_string());
                Outcome::Stay
            }
        }
    }

    /// Conflict dialog, first choice: escalate the staged request.
    #[instrument(name = "request_approval", skip(self))]
    pub async fn request_approval(&self) -> Outcome {
        let Some(pending) = self.session.pending_conflict() else {
            self.notifier
                .warn(notify::ATTENTION, "There is no conflicting request to escalate.");
            return Outcome::Stay;
        };
        let Some(_guard) = self.session.try_lock() else {
            debug!("Approval request already in flight");
            return Outcome::Busy;
        };

        info!(badge = %pending.request.badge, competing = %pending.competing.name, "Requesting approval");
        self.session.set_phase(FormPhase::Submitting);
        match self.api.request_approval(&pending.request).await {
            // approved or merely queued, the server holds the outcome now
            Ok(ack) => {
                self.notifier
                    .info(notify::INFORMATION, &ack.message_or("Approval request sent."));
                self.reload()
            }
            Err(e) => {
                error!(error = %e, "Approval request failed");
                self.session.set_phase(FormPhase::Conflict);
                self.notifier.error(notify::ERROR, &e.to_string());
                Outcome::Stay
            }
        }
    }

    /// Conflict dialog, second choice: close it and pick new dates.
    pub fn pick_another_date(&self) -> Outcome {
        debug!("Conflict dialog dismissed");
        self.session.clear_conflict();
        Outcome::Stay
    }

    /// New dates wait until the conflict dialog is answered, so the staged
    /// request stays the one the dialog shows.
    fn conflict_open(&self) -> bool {
        if self.session.pending_conflict().is_none() {
            return false;
        }
        debug!("Conflict dialog still open");
        self.notifier.warn(
            notify::ATTENTION,
            "Request approval or pick another date first.",
        );
        true
    }

    fn check_dates(&self, choice: &DateChoice) -> ClientResult<NaiveDate> {
        dates::ensure_not_past(choice.start_date, self.clock.today())?;
        dates::return_date(choice.start_date, choice.days)
    }

    fn settle(&self, request: BookingRequest, reply: ClientResult<SubmitReply>) -> Outcome {
        match reply {
            Ok(SubmitReply::Accepted { message }) => {
                info!("Booking accepted");
                self.notifier.success(notify::SUCCESS, &message);
                self.reload()
            }
            Ok(SubmitReply::Refused { message }) => {
                warn!(message = %message, "Booking refused");
                self.session.set_phase(FormPhase::HasEmployee);
                self.notifier.warn(notify::ATTENTION, &message);
                Outcome::Stay
            }
            Ok(SubmitReply::Conflict(competing)) => {
                warn!(competing = %competing.name, "Booking conflicts with an existing one");
                self.notifier.conflict(&competing);
                self.session.stage_conflict(PendingConflict { request, competing });
                Outcome::Stay
            }
            Err(e) => {
                error!(error = %e, "Booking submission failed");
                self.session.set_phase(FormPhase::HasEmployee);
                self.notifier.error(notify::ERROR, &e.to_string());
                Outcome::Stay
            }
        }
    }

    fn reload(&self) -> Outcome {
        info!("Reloading form");
        self.session.reset();
        Outcome::Reload
    }
}
