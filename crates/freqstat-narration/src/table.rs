//! Plain-text frequency tables.

use serde::Serialize;

/// A table of preformatted cells with an optional totals row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub totals: Option<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<I>(headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: vec![],
            totals: None,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn set_totals(&mut self, totals: Vec<String>) {
        debug_assert_eq!(totals.len(), self.headers.len());
        self.totals = Some(totals);
    }

    /// Renders the table with the first column left-aligned and the others
    /// right-aligned, each line indented by two spaces.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        let separator = format!(
            "  {}",
            "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2)
        );

        let mut lines = vec![render_row(&self.headers, &widths), separator.clone()];
        lines.extend(self.rows.iter().map(|row| render_row(row, &widths)));
        if let Some(totals) = &self.totals {
            lines.push(separator);
            lines.push(render_row(totals, &widths));
        }
        lines
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = self.headers.iter().map(|h| width(h)).collect::<Vec<_>>();
        for row in self.rows.iter().chain(&self.totals) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(width(cell));
            }
        }
        widths
    }
}

/// Display width, ignoring combining marks such as the bar in `x̄`.
fn width(cell: &str) -> usize {
    cell.chars()
        .filter(|c| !('\u{300}'..='\u{36f}').contains(c))
        .count()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from(" ");
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        let pad = " ".repeat(w.saturating_sub(width(cell)));
        line.push(' ');
        if i == 0 {
            line.push_str(cell);
            line.push_str(&pad);
        } else {
            line.push(' ');
            line.push_str(&pad);
            line.push_str(cell);
        }
    }
    line.trim_end().to_owned()
}
