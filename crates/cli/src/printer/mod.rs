use std::io::{self, BufWriter, IsTerminal, Stdout, Write};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use lz_engine::{Collection, Entry, SortKey};
use lz_runtime::{DEFAULT_TERMINAL_WIDTH, GRID_MARGIN, color_disabled_by_env, columns_from_env};

mod grid;
mod table;

use crate::config::ListingConfig;
use grid::Grid;
use table::{Cell, Table};

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorChoice {
    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && !color_disabled_by_env(),
        }
    }
}

/// Output layout. Exactly one is used per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Names only, as many columns as fit.
    Grid,
    /// `property name`, one entry per line.
    Annotated(SortKey),
    /// `mode owner size time name`, one entry per line.
    Long,
}

impl Layout {
    /// Long wins; otherwise an active sort key shows its property next to each name.
    pub fn select(sort_key: SortKey, long: bool) -> Self {
        if long {
            Layout::Long
        } else if sort_key.is_active() {
            Layout::Annotated(sort_key)
        } else {
            Layout::Grid
        }
    }
}

/// Configuration for printing a listing.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub layout: Layout,
    pub color: ColorChoice,
    /// Display width available to the grid layout.
    pub width: usize,
    /// Reference point for relative times.
    pub now: DateTime<Utc>,
}

impl PrinterConfig {
    pub fn for_listing(config: &ListingConfig) -> Self {
        Self {
            layout: Layout::select(config.sort_key, config.long),
            color: config.color,
            width: terminal_width(),
            now: Utc::now(),
        }
    }
}

/// Terminal columns, then `COLUMNS`, then the default.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| usize::from(w.0))
        .filter(|&w| w > 0)
        .or_else(columns_from_env)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

pub struct Printer<W: Write> {
    out: W,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write> Printer<W> {
    /// Printer over an arbitrary writer. `ColorChoice::Auto` means no color
    /// here, since only stdout can be probed for a terminal.
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color.resolve(false);
        Self {
            out,
            cfg,
            use_color,
        }
    }

    pub fn print(&mut self, collection: &Collection) -> io::Result<()> {
        if collection.is_empty() {
            return Ok(());
        }

        match self.cfg.layout {
            Layout::Grid => self.print_grid(collection)?,
            Layout::Annotated(key) => self.print_annotated(collection, key)?,
            Layout::Long => self.print_long(collection)?,
        }

        self.out.flush()
    }

    fn name_cell(&self, entry: &Entry) -> Cell {
        let plain = entry.display_name();
        if self.use_color {
            Cell::painted(entry.painted_name(), &plain)
        } else {
            Cell::new(plain)
        }
    }

    fn print_grid(&mut self, collection: &Collection) -> io::Result<()> {
        let cells = collection.iter().map(|e| self.name_cell(e)).collect();
        Grid::new(cells, GRID_MARGIN).write(&mut self.out, self.cfg.width)
    }

    fn print_annotated(&mut self, collection: &Collection, key: SortKey) -> io::Result<()> {
        let mut table = Table::new();
        for entry in collection {
            table.push_row(vec![
                Cell::new(entry.property(key, self.cfg.now)),
                self.name_cell(entry),
            ]);
        }
        table.write(&mut self.out)
    }

    fn print_long(&mut self, collection: &Collection) -> io::Result<()> {
        let mut table = Table::new();
        for entry in collection {
            table.push_row(vec![
                Cell::new(entry.mode_string()),
                Cell::new(entry.owner().to_owned()),
                Cell::new(entry.human_size()),
                Cell::new(entry.relative_time(self.cfg.now)),
                self.name_cell(entry),
            ]);
        }
        table.write(&mut self.out)
    }
}

impl Printer<BufWriter<Stdout>> {
    /// Printer on stdout, probing it for a terminal.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        let stdout = io::stdout();
        let use_color = cfg.color.resolve(stdout.is_terminal());

        let mut printer = Printer::new(BufWriter::new(stdout), cfg);
        printer.use_color = use_color;
        printer
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
