use std::cell::{Cell, RefCell};

use strum_macros::Display;

use crate::model::approval::PendingConflict;
use crate::model::booking::{BookingRow, ExistingBooking};
use crate::model::employee::{Badge, EmployeeRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum FormPhase {
    #[default]
    Idle,
    LookingUp,
    HasEmployee,
    Submitting,
    Conflict,
}

#[derive(Debug, Default)]
struct SessionData {
    phase: FormPhase,
    employee: Option<EmployeeRecord>,
    existing: Option<ExistingBooking>,
    bookings: Option<Vec<BookingRow>>,
    pending: Option<PendingConflict>,
}

/// Page state of one form session.
///
/// Single-threaded: network completions and user actions interleave on one
/// event loop, so plain cells are enough. No borrow is ever held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct Session {
    data: RefCell<SessionData>,
    submitting: Cell<bool>,
}

/// Held while a submission is in flight; dropping it frees the form.
#[derive(Debug)]
pub struct SubmissionGuard<'a> {
    lock: &'a Cell<bool>,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.lock.set(false);
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another submission holds the lock.
    pub fn try_lock(&self) -> Option<SubmissionGuard<'_>> {
        if self.submitting.replace(true) {
            return None;
        }
        Some(SubmissionGuard {
            lock: &self.submitting,
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn phase(&self) -> FormPhase {
        self.data.borrow().phase
    }

    pub fn set_phase(&self, phase: FormPhase) {
        self.data.borrow_mut().phase = phase;
    }

    /// Marks a lookup in flight and returns the phase to go back to if it fails.
    pub fn begin_lookup(&self) -> FormPhase {
        let mut data = self.data.borrow_mut();
        std::mem::replace(&mut data.phase, FormPhase::LookingUp)
    }

    pub fn employee(&self) -> Option<EmployeeRecord> {
        self.data.borrow().employee.clone()
    }

    pub fn is_current(&self, badge: &Badge) -> bool {
        self.data
            .borrow()
            .employee
            .as_ref()
            .is_some_and(|e| &e.badge == badge)
    }

    /// A new employee replaces everything learned about the previous one.
    pub fn set_employee(&self, employee: EmployeeRecord) {
        let mut data = self.data.borrow_mut();
        data.employee = Some(employee);
        data.existing = None;
        data.bookings = None;
        data.pending = None;
        data.phase = FormPhase::HasEmployee;
    }

    pub fn clear_employee(&self) {
        let mut data = self.data.borrow_mut();
        data.employee = None;
        data.existing = None;
        data.pending = None;
        data.phase = FormPhase::Idle;
    }

    pub fn existing(&self) -> Option<ExistingBooking> {
        self.data.borrow().existing.clone()
    }

    pub fn set_existing(&self, existing: Option<ExistingBooking>) {
        self.data.borrow_mut().existing = existing;
    }

    pub fn bookings(&self) -> Option<Vec<BookingRow>> {
        self.data.borrow().bookings.clone()
    }

    pub fn set_bookings(&self, bookings: Vec<BookingRow>) {
        self.data.borrow_mut().bookings = Some(bookings);
    }

    pub fn pending_conflict(&self) -> Option<PendingConflict> {
        self.data.borrow().pending.clone()
    }

    /// Replaces any earlier conflict: only the latest one can be escalated.
    pub fn stage_conflict(&self, conflict: PendingConflict) {
        let mut data = self.data.borrow_mut();
        data.pending = Some(conflict);
        data.phase = FormPhase::Conflict;
    }

    /// Dialog dismissed: back to the date choice.
    pub fn clear_conflict(&self) {
        let mut data = self.data.borrow_mut();
        data.pending = None;
        data.phase = if data.employee.is_some() {
            FormPhase::HasEmployee
        } else {
            FormPhase::Idle
        };
    }

    /// Page reload: everything but an in-flight lock is dropped.
    pub fn reset(&self) {
        *self.data.borrow_mut() = SessionData::default();
    }
}
