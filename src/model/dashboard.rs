use serde::Deserialize;

use crate::model::approval::PendingApproval;

/// Bookings per department and month, as served by the dashboard endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardData {
    /// Months as `YYYY-MM`, sorted by the server
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub total_agendamentos: u64,
    #[serde(default)]
    pub pedidos_aprovacao: Vec<PendingApproval>,
}

/// One department's series; `data[i]` and `custom_data[i]` belong to `labels[i]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<u64>,
    /// Per-month detail text, one `name (n dias)` line per booking
    #[serde(rename = "customData", default)]
    pub custom_data: Vec<String>,
}
