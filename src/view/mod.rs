pub mod booking_table;
pub mod dashboard;

pub use booking_table::BookingListView;
pub use dashboard::{ChartView, DashboardView};

/// Minimal escaping for text placed inside HTML elements and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Left-aligned plain text table, used for terminal output.
pub(crate) fn text_table(headers: &[&str], rows: &[(bool, Vec<String>)]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in rows {
        for (i, cell) in cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |marker: char, cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{} {}", marker, padded.join(" | "))
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(' ', headers.to_vec())];
    for (highlighted, cells) in rows {
        let marker = if *highlighted { '*' } else { ' ' };
        lines.push(line(marker, cells.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}
