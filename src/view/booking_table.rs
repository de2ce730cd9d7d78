use std::fmt;

use crate::model::booking::BookingRow;
use crate::utils::dates::display_wire;
use crate::view::{escape_html, text_table};

pub const EMPTY_MESSAGE: &str = "No bookings found.";

const HEADERS: [&str; 6] = [
    "Badge",
    "Name",
    "Department",
    "Start date",
    "Days",
    "Return date",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTableRow {
    pub cells: [String; 6],
    /// Same department as the employee looked up
    pub highlighted: bool,
}

/// Existing bookings, in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingListView {
    Empty,
    Table(Vec<BookingTableRow>),
}

impl BookingListView {
    /// Rows of `department` are highlighted; the comparison is exact and
    /// case-sensitive.
    pub fn render(rows: &[BookingRow], department: Option<&str>) -> Self {
        if rows.is_empty() {
            return BookingListView::Empty;
        }

        let rows = rows
            .iter()
            .map(|row| BookingTableRow {
                highlighted: department == Some(row.department.as_str()),
                cells: [
                    row.badge.clone(),
                    row.name.clone(),
                    row.department.clone(),
                    display_wire(&row.start_date),
                    row.days.to_string(),
                    display_wire(&row.return_date),
                ],
            })
            .collect();

        BookingListView::Table(rows)
    }

    pub fn to_html(&self) -> String {
        let rows = match self {
            BookingListView::Empty => return format!("<p>{}</p>", EMPTY_MESSAGE),
            BookingListView::Table(rows) => rows,
        };

        let mut html = String::from("<table class=\"table table-striped\"><thead><tr>");
        for header in HEADERS {
            html.push_str(&format!("<th>{}</th>", header));
        }
        html.push_str("</tr></thead><tbody>");
        for row in rows {
            if row.highlighted {
                html.push_str("<tr class=\"highlight\">");
            } else {
                html.push_str("<tr>");
            }
            for cell in &row.cells {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

impl fmt::Display for BookingListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingListView::Empty => f.write_str(EMPTY_MESSAGE),
            BookingListView::Table(rows) => {
                let rows: Vec<(bool, Vec<String>)> = rows
                    .iter()
                    .map(|r| (r.highlighted, r.cells.to_vec()))
                    .collect();
                f.write_str(&text_table(&HEADERS, &rows))
            }
        }
    }
}
