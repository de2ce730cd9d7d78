use std::cell::RefCell;

use tracing::{debug, error, info, instrument, warn};

use crate::api::DashboardApi;
use crate::controller::Outcome;
use crate::model::approval::ApprovalAction;
use crate::notify::{self, Notifier};
use crate::view::DashboardView;

/// Supervisor dashboard: bookings chart, pending approvals and bulk delete.
pub struct DashboardPage<A, N> {
    api: A,
    notifier: N,
    view: RefCell<Option<DashboardView>>,
}

impl<A, N> DashboardPage<A, N>
where
    A: DashboardApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            view: RefCell::new(None),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Last view loaded, `None` before the first successful `load`.
    pub fn view(&self) -> Option<DashboardView> {
        self.view.borrow().clone()
    }

    #[instrument(name = "dashboard_load", skip(self))]
    pub async fn load(&self) -> Outcome {
        match self.api.dashboard_data().await {
            Ok(data) => {
                debug!(
                    total = data.total_agendamentos,
                    pending = data.pedidos_aprovacao.len(),
                    "Dashboard data loaded"
                );
                *self.view.borrow_mut() = Some(DashboardView::from_data(&data));
            }
            Err(e) => {
                error!(error = %e, "Loading dashboard data failed");
                self.notifier.error(notify::ERROR, &e.to_string());
            }
        }
        Outcome::Stay
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, request_id: u64, action: ApprovalAction) -> Outcome {
        match self.api.resolve_approval(request_id, action).await {
            Ok(ack) if ack.succeeded() => {
                info!(%action, "Approval request resolved");
                self.reload()
            }
            Ok(_) => {
                warn!(%action, "Approval request not resolved");
                let text = match action {
                    ApprovalAction::Approve => "Error approving request.",
                    ApprovalAction::Reject => "Error rejecting request.",
                };
                self.notifier.error(notify::ERROR, text);
                Outcome::Stay
            }
            Err(e) => {
                error!(error = %e, "Resolving approval request failed");
                self.notifier.error(notify::ERROR, &e.to_string());
                Outcome::Stay
            }
        }
    }

    /// Deletes every booking after an explicit confirmation.
    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Outcome {
        if !self
            .notifier
            .confirm(notify::CONFIRMATION, "Delete all scheduled vacations?")
        {
            return Outcome::Stay;
        }

        match self.api.delete_all_bookings().await {
            Ok(ack) if ack.succeeded() => {
                info!("All bookings deleted");
                self.reload()
            }
            Ok(_) => {
                warn!("Bookings not deleted");
                self.notifier.error(notify::ERROR, "Error deleting bookings.");
                Outcome::Stay
            }
            Err(e) => {
                error!(error = %e, "Deleting bookings failed");
                self.notifier.error(notify::ERROR, &e.to_string());
                Outcome::Stay
            }
        }
    }

    fn reload(&self) -> Outcome {
        self.view.borrow_mut().take();
        Outcome::Reload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use crate::model::Ack;
    use crate::model::dashboard::DashboardData;
    use crate::notify::Level;
    use crate::notify::testing::RecordingNotifier;
    use crate::view::ChartView;
    use async_trait::async_trait;
    use futures::executor::block_on;

    #[derive(Default)]
    struct FakeDashboard {
        data: DashboardData,
        succeed: bool,
        resolved: RefCell<Vec<(u64, ApprovalAction)>>,
        deletes: RefCell<u32>,
        offline: bool,
    }

    impl FakeDashboard {
        fn ack(&self) -> ClientResult<Ack> {
            if self.offline {
                return Err(ClientError::Transport("connection refused".into()));
            }
            Ok(Ack {
                success: Some(self.succeed),
                message: None,
            })
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeDashboard {
        async fn dashboard_data(&self) -> ClientResult<DashboardData> {
            if self.offline {
                return Err(ClientError::Transport("connection refused".into()));
            }
            Ok(self.data.clone())
        }

        async fn resolve_approval(&self, request_id: u64, action: ApprovalAction) -> ClientResult<Ack> {
            self.resolved.borrow_mut().push((request_id, action));
            self.ack()
        }

        async fn delete_all_bookings(&self) -> ClientResult<Ack> {
            *self.deletes.borrow_mut() += 1;
            self.ack()
        }
    }

    fn page(api: FakeDashboard) -> DashboardPage<FakeDashboard, RecordingNotifier> {
        DashboardPage::new(api, RecordingNotifier::default())
    }

    #[test]
    fn empty_dashboard_loads_without_a_chart() {
        let page = page(FakeDashboard::default());
        block_on(page.load());
        let view = page.view().unwrap();
        assert_eq!(view.chart, ChartView::Empty);
        assert_eq!(view.total_bookings, 0);
    }

    #[test]
    fn load_failure_is_shown_verbatim() {
        let page = page(FakeDashboard {
            offline: true,
            ..FakeDashboard::default()
        });
        block_on(page.load());
        assert!(page.view().is_none());
        assert_eq!(page.notifier().notices(Level::Error), vec!["connection refused"]);
    }

    #[test]
    fn resolved_request_reloads() {
        let page = page(FakeDashboard {
            succeed: true,
            ..FakeDashboard::default()
        });
        assert_eq!(block_on(page.resolve(7, ApprovalAction::Approve)), Outcome::Reload);
        assert_eq!(*page.api.resolved.borrow(), vec![(7, ApprovalAction::Approve)]);
    }

    #[test]
    fn resolve_and_delete_come_back_to_the_dashboard() {
        use crate::controller::Page;

        let page = page(FakeDashboard {
            succeed: true,
            ..FakeDashboard::default()
        });
        block_on(page.load());
        assert!(page.view().is_some());

        let outcome = block_on(page.resolve(7, ApprovalAction::Reject)).on_page(Page::Dashboard);
        assert_eq!(outcome, Outcome::Redirect(Page::Dashboard));
        // the stale view is dropped until the dashboard is loaded again
        assert!(page.view().is_none());

        let outcome = block_on(page.delete_all()).on_page(Page::Dashboard);
        assert_eq!(outcome, Outcome::Redirect(Page::Dashboard));
    }

    #[test]
    fn unresolved_request_names_the_action() {
        let page = page(FakeDashboard::default());
        assert_eq!(block_on(page.resolve(7, ApprovalAction::Approve)), Outcome::Stay);
        assert_eq!(block_on(page.resolve(8, ApprovalAction::Reject)), Outcome::Stay);
        assert_eq!(
            page.notifier().notices(Level::Error),
            vec!["Error approving request.", "Error rejecting request."]
        );
    }

    #[test]
    fn delete_all_asks_first() {
        let page = page(FakeDashboard {
            succeed: true,
            ..FakeDashboard::default()
        });
        page.notifier().refuse_confirm.set(true);
        assert_eq!(block_on(page.delete_all()), Outcome::Stay);
        assert_eq!(*page.api.deletes.borrow(), 0);

        page.notifier().refuse_confirm.set(false);
        assert_eq!(block_on(page.delete_all()), Outcome::Reload);
        assert_eq!(*page.api.deletes.borrow(), 1);
    }

    #[test]
    fn failed_delete_shows_the_fixed_message() {
        let page = page(FakeDashboard::default());
        block_on(page.delete_all());
        assert_eq!(page.notifier().notices(Level::Error), vec!["Error deleting bookings."]);
    }
}
