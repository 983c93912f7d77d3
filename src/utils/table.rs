//! Table rendering utilities for CLI outputs.

use crate::utils::colors::colorize;
use crate::utils::formatting::{pad_right, truncate};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Cells wider than this are cut with an ellipsis.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    row_colors: Vec<Option<&'static str>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_colors: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
        self.row_colors.push(None);
    }

    /// Whole line painted with an ANSI color; widths are computed on the
    /// plain cells.
    pub fn add_colored_row(&mut self, row: Vec<String>, color: &'static str) {
        self.rows.push(row);
        self.row_colors.push(Some(color));
    }

    /// Column widths follow the widest cell (display width, not bytes).
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .max()
                    .unwrap_or(0);
                widest
                    .max(UnicodeWidthStr::width(col.header.as_str()))
                    .min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push_str("  ");
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        for (row, color) in self.rows.iter().zip(&self.row_colors) {
            let mut line = String::new();
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad_right(&truncate(cell, *w), *w));
                line.push_str("  ");
            }
            match color {
                Some(c) => out.push_str(&colorize(line.trim_end(), c)),
                None => out.push_str(line.trim_end()),
            }
            out.push('\n');
        }

        out
    }
}
