use async_trait::async_trait;

use crate::api::HttpBackend;
use crate::error::ClientResult;
use crate::model::Ack;
use crate::model::approval::{ApprovalAction, ApprovalDecision};
use crate::model::dashboard::DashboardData;
use crate::routes;

#[async_trait(?Send)]
pub trait DashboardApi {
    async fn dashboard_data(&self) -> ClientResult<DashboardData>;

    async fn resolve_approval(&self, request_id: u64, action: ApprovalAction) -> ClientResult<Ack>;

    /// Wipes every scheduled vacation on the server.
    async fn delete_all_bookings(&self) -> ClientResult<Ack>;
}

#[async_trait(?Send)]
impl DashboardApi for HttpBackend {
    async fn dashboard_data(&self) -> ClientResult<DashboardData> {
        self.get_json(routes::DASHBOARD_DATA, &[]).await
    }

    async fn resolve_approval(&self, request_id: u64, action: ApprovalAction) -> ClientResult<Ack> {
        let body = ApprovalDecision {
            pedido_id: request_id,
            acao: action,
        };
        self.post_json(routes::RESOLVE_APPROVAL, &body).await
    }

    async fn delete_all_bookings(&self) -> ClientResult<Ack> {
        self.post_empty(routes::DELETE_BOOKINGS).await
    }
}
