use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::model::booking::{BookingRequest, ConflictDetails};
use crate::utils::lenient;

/// Request held back by a conflict, waiting for "request approval" or
/// "pick another date".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConflict {
    pub request: BookingRequest,
    pub competing: ConflictDetails,
}

/// Supervisor decision on an approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
pub enum ApprovalAction {
    #[serde(rename = "aprovar")]
    #[strum(to_string = "aprovar", serialize = "approve")]
    Approve,
    #[serde(rename = "rejeitar")]
    #[strum(to_string = "rejeitar", serialize = "reject")]
    Reject,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApprovalDecision {
    pub pedido_id: u64,
    pub acao: ApprovalAction,
}

/// Pending approval row, sent by the server as a positional array
/// `[id, nome, dataFerias, diasFerias, status, data_pedido]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingApproval(
    pub u64,
    #[serde(deserialize_with = "lenient::text")] pub String,
    #[serde(deserialize_with = "lenient::text")] pub String,
    #[serde(deserialize_with = "lenient::day_count")] pub u32,
    #[serde(deserialize_with = "lenient::text")] pub String,
    #[serde(deserialize_with = "lenient::text")] pub String,
);

impl PendingApproval {
    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn start_date(&self) -> &str {
        &self.2
    }

    pub fn days(&self) -> u32 {
        self.3
    }

    pub fn status(&self) -> &str {
        &self.4
    }

    pub fn requested_at(&self) -> &str {
        &self.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn action_parses_both_languages() {
        assert_eq!(ApprovalAction::from_str("approve").unwrap(), ApprovalAction::Approve);
        assert_eq!(ApprovalAction::from_str("rejeitar").unwrap(), ApprovalAction::Reject);
        assert!(ApprovalAction::from_str("maybe").is_err());
        assert_eq!(ApprovalAction::Approve.as_ref(), "aprovar");
    }

    #[test]
    fn decision_body() {
        let body = ApprovalDecision {
            pedido_id: 3,
            acao: ApprovalAction::Reject,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"pedido_id": 3, "acao": "rejeitar"})
        );
    }

    #[test]
    fn pending_approval_from_array() {
        let row: PendingApproval = serde_json::from_str(
            r#"[7, "Ana", "2024-02-01", "10", "PENDENTE", "2024-01-15 09:30:00"]"#,
        )
        .unwrap();
        assert_eq!(row.id(), 7);
        assert_eq!(row.name(), "Ana");
        assert_eq!(row.days(), 10);
        assert_eq!(row.status(), "PENDENTE");
    }
}
