use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Gap after the widest cell of every column but the last.
const CELL_PADDING: usize = 1;

/// One piece of output text and the width it occupies on screen.
///
/// Painted text carries ANSI escapes, so its width is taken from the plain form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    pub fn new(text: String) -> Self {
        let width = text.width();
        Self { text, width }
    }

    pub fn painted(text: String, plain: &str) -> Self {
        Self {
            text,
            width: plain.width(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

pub(crate) fn write_padding<W: Write + ?Sized>(out: &mut W, n: usize) -> io::Result<()> {
    write!(out, "{:n$}", "")
}

/// Left-aligned columns, like a tab writer with padding 1.
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in &self.rows {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width);
            }
        }
        widths
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths();

        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                out.write_all(cell.text.as_bytes())?;
                if i < last {
                    write_padding(out, widths[i] - cell.width + CELL_PADDING)?;
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
