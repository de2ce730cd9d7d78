use async_trait::async_trait;

use crate::api::HttpBackend;
use crate::error::ClientResult;
use crate::model::Ack;
use crate::model::booking::{
    BookingCheck, BookingRequest, BookingRow, CancelRequest, ExistingBooking, SubmitReply,
    SubmitResponse,
};
use crate::model::employee::{Badge, EmployeeLookup, EmployeeRecord};
use crate::routes;

/// Server calls behind the vacation request form.
#[async_trait(?Send)]
pub trait BookingApi {
    /// `Ok(None)` when no employee carries the badge.
    async fn find_employee(&self, badge: &Badge) -> ClientResult<Option<EmployeeRecord>>;

    async fn check_booking(&self, badge: &Badge) -> ClientResult<Option<ExistingBooking>>;

    /// Every scheduled vacation, in server order.
    async fn list_bookings(&self) -> ClientResult<Vec<BookingRow>>;

    async fn submit_booking(&self, request: &BookingRequest) -> ClientResult<SubmitReply>;

    async fn alter_booking(&self, request: &BookingRequest) -> ClientResult<SubmitReply>;

    async fn cancel_booking(&self, badge: &Badge) -> ClientResult<Ack>;

    /// Escalates a conflicting request to a supervisor.
    async fn request_approval(&self, request: &BookingRequest) -> ClientResult<Ack>;
}

#[async_trait(?Send)]
impl BookingApi for HttpBackend {
    async fn find_employee(&self, badge: &Badge) -> ClientResult<Option<EmployeeRecord>> {
        let lookup: EmployeeLookup = self
            .get_json(routes::FIND_EMPLOYEE, &[(routes::BADGE_PARAM, badge.as_str())])
            .await?;
        Ok(lookup.into_record(badge.clone()))
    }

    async fn check_booking(&self, badge: &Badge) -> ClientResult<Option<ExistingBooking>> {
        let check: BookingCheck = self
            .get_json(routes::CHECK_BOOKING, &[(routes::BADGE_PARAM, badge.as_str())])
            .await?;
        check.into_booking(badge.clone())
    }

    async fn list_bookings(&self) -> ClientResult<Vec<BookingRow>> {
        self.get_json(routes::LIST_BOOKINGS, &[]).await
    }

    async fn submit_booking(&self, request: &BookingRequest) -> ClientResult<SubmitReply> {
        let resp: SubmitResponse = self.post_json(routes::SUBMIT_BOOKING, request).await?;
        Ok(resp.into())
    }

    async fn alter_booking(&self, request: &BookingRequest) -> ClientResult<SubmitReply> {
        let resp: SubmitResponse = self.post_json(routes::ALTER_BOOKING, request).await?;
        Ok(resp.into())
    }

    async fn cancel_booking(&self, badge: &Badge) -> ClientResult<Ack> {
        let body = CancelRequest {
            badge: badge.clone(),
        };
        self.post_json(routes::CANCEL_BOOKING, &body).await
    }

    async fn request_approval(&self, request: &BookingRequest) -> ClientResult<Ack> {
        self.post_json(routes::REQUEST_APPROVAL, request).await
    }
}
