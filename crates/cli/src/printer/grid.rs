use std::io::{self, Write};

use super::table::{Cell, write_padding};

/// Names laid out row-major in equal-width columns.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    margin: usize,
}

impl Grid {
    pub fn new(cells: Vec<Cell>, margin: usize) -> Self {
        Self { cells, margin }
    }

    fn column_width(&self) -> usize {
        self.cells.iter().map(Cell::width).max().unwrap_or(0) + self.margin
    }

    /// Columns that fit in `width`; never less than one.
    pub fn columns(&self, width: usize) -> usize {
        (width / self.column_width().max(1)).clamp(1, self.cells.len().max(1))
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        let col_width = self.column_width();
        let columns = self.columns(width);

        for row in self.cells.chunks(columns) {
            let last = row.len() - 1;
            for (i, cell) in row.iter().enumerate() {
                out.write_all(cell.text().as_bytes())?;
                if i < last {
                    write_padding(out, col_width - cell.width())?;
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
