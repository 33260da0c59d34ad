//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, align: Align) -> Self {
        Self {
            header: header.to_string(),
            align,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of each column: widest of header and cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let parts: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, w))| {
                let cell = cells.get(i).copied().unwrap_or("");
                // format! pads by char count, so correct for wide glyphs
                let chars = cell.chars().count();
                let target = (w + chars).saturating_sub(UnicodeWidthStr::width(cell));
                match col.align {
                    Align::Left => pad_right(cell, target),
                    Align::Right => pad_left(cell, target),
                }
            })
            .collect();

        parts.join("  ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.render_line(&headers, &widths));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.render_line(&cells, &widths));
            out.push('\n');
        }

        out
    }
}
