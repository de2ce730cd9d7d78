use std::fmt;

use crate::model::approval::PendingApproval;
use crate::model::dashboard::DashboardData;
use crate::utils::dates::{display_wire, month_label};
use crate::view::text_table;

pub const EMPTY_DASHBOARD: &str = "No vacation bookings.";

/// Widest bar drawn in the text chart; the count is printed next to it.
const MAX_BAR: u64 = 40;

/// Bar chart of bookings per month, one series per department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartView {
    Empty,
    Bars {
        /// Month labels as `MM/YYYY`
        labels: Vec<String>,
        series: Vec<Series>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub counts: Vec<u64>,
    pub details: Vec<String>,
}

impl Series {
    /// Tooltip of the bar at `index`: `Department: n`, followed by the
    /// booking details when the server sent any.
    pub fn tooltip(&self, index: usize) -> String {
        let count = self.counts.get(index).copied().unwrap_or(0);
        let mut text = if self.label.is_empty() {
            count.to_string()
        } else {
            format!("{}: {}", self.label, count)
        };
        if let Some(detail) = self.details.get(index).filter(|d| !d.is_empty()) {
            text.push_str("\nDetails: ");
            text.push_str(detail);
        }
        text
    }
}

impl ChartView {
    pub fn from_data(data: &DashboardData) -> Self {
        if data.total_agendamentos == 0 {
            return ChartView::Empty;
        }

        ChartView::Bars {
            labels: data.labels.iter().map(|l| month_label(l)).collect(),
            series: data
                .datasets
                .iter()
                .map(|d| Series {
                    label: d.label.clone(),
                    counts: d.data.clone(),
                    details: d.custom_data.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (labels, series) = match self {
            ChartView::Empty => return f.write_str(EMPTY_DASHBOARD),
            ChartView::Bars { labels, series } => (labels, series),
        };

        for (i, month) in labels.iter().enumerate() {
            writeln!(f, "{}", month)?;
            for s in series {
                let count = s.counts.get(i).copied().unwrap_or(0);
                if count == 0 {
                    continue;
                }
                let bar = "#".repeat(count.min(MAX_BAR) as usize);
                writeln!(f, "  {:<16} {} {}", s.label, bar, count)?;
                if let Some(detail) = s.details.get(i).filter(|d| !d.is_empty()) {
                    for line in detail.lines() {
                        writeln!(f, "    {}", line)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub total_bookings: u64,
    pub chart: ChartView,
    pub pending: Vec<PendingApproval>,
}

impl DashboardView {
    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            total_bookings: data.total_agendamentos,
            chart: ChartView::from_data(data),
            pending: data.pedidos_aprovacao.clone(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scheduled vacations: {}", self.total_bookings)?;
        writeln!(f, "{}", self.chart)?;

        if self.pending.is_empty() {
            return write!(f, "No pending approval requests.");
        }
        let rows: Vec<(bool, Vec<String>)> = self
            .pending
            .iter()
            .map(|p| {
                (
                    false,
                    vec![
                        p.id().to_string(),
                        p.name().to_string(),
                        display_wire(p.start_date()),
                        p.days().to_string(),
                        p.status().to_string(),
                        p.requested_at().to_string(),
                    ],
                )
            })
            .collect();
        write!(
            f,
            "{}",
            text_table(
                &["Id", "Name", "Start date", "Days", "Status", "Requested at"],
                &rows
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dashboard::Dataset;

    fn sample() -> DashboardData {
        serde_json::from_str(
            r#"{
                "labels": ["2024-01", "2024-02"],
                "datasets": [
                    {"label": "TI", "data": [2, 0], "customData": ["Ana (5 dias)\nBia (10 dias)", ""],
                     "backgroundColor": "rgba(75, 192, 192, 0.5)", "borderWidth": 1},
                    {"label": "RH", "data": [0, 1], "customData": ["", "Caio (3 dias)"]}
                ],
                "total_agendamentos": 3,
                "pedidos_aprovacao": [[4, "Davi", "2024-03-01", 7, "PENDENTE", "2024-02-20 10:00:00"]]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn no_bookings_renders_the_empty_message() {
        let data = DashboardData {
            labels: vec!["2024-01".into()],
            datasets: vec![Dataset::default()],
            ..DashboardData::default()
        };
        assert_eq!(ChartView::from_data(&data), ChartView::Empty);
        assert_eq!(ChartView::Empty.to_string(), EMPTY_DASHBOARD);
    }

    #[test]
    fn month_labels_are_converted() {
        let ChartView::Bars { labels, series } = ChartView::from_data(&sample()) else {
            panic!("expected bars");
        };
        assert_eq!(labels, vec!["01/2024", "02/2024"]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].counts, vec![0, 1]);
    }

    #[test]
    fn tooltip_appends_details_when_present() {
        let ChartView::Bars { series, .. } = ChartView::from_data(&sample()) else {
            panic!("expected bars");
        };
        assert_eq!(series[0].tooltip(0), "TI: 2\nDetails: Ana (5 dias)\nBia (10 dias)");
        assert_eq!(series[0].tooltip(1), "TI: 0");
        assert_eq!(series[0].tooltip(9), "TI: 0");
    }

    #[test]
    fn bars_are_capped_for_huge_counts() {
        let data = DashboardData {
            labels: vec!["2024-01".into()],
            datasets: vec![Dataset {
                label: "TI".into(),
                data: vec![u64::MAX],
                custom_data: vec![],
            }],
            total_agendamentos: u64::MAX,
            ..DashboardData::default()
        };
        let text = ChartView::from_data(&data).to_string();
        let line = text.lines().find(|l| l.contains("TI")).unwrap();
        assert_eq!(line.matches('#').count(), MAX_BAR as usize);
        assert!(line.ends_with(&u64::MAX.to_string()));
    }

    #[test]
    fn small_bars_keep_their_length() {
        let text = ChartView::from_data(&sample()).to_string();
        assert!(text.contains("  TI               ## 2\n"));
    }

    #[test]
    fn dashboard_text_lists_pending_requests() {
        let text = DashboardView::from_data(&sample()).to_string();
        assert!(text.starts_with("Scheduled vacations: 3"));
        assert!(text.contains("01/2024"));
        assert!(text.contains("Davi"));
        assert!(text.contains("01/03/2024"));
    }
}
