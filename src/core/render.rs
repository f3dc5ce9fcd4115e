//! Table rendering
//!
//! The formatter talks to a [`TableRenderer`]; [`TabledRenderer`] is the
//! default one, drawing single-line box borders with `tabled` and dimming
//! the border (never the cell text) when color output is on.

use crate::core::error::{Result, ReqtableError};
use crate::core::palette;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::style::BorderColor;
use tabled::settings::{Color, Style, Width};

/// Turns a grid of already-colored cells into a bordered table
pub trait TableRenderer: Send + Sync {
    /// Render `rows` with `widths` applied to columns by position
    ///
    /// Every row must have the same, non-zero number of cells.
    fn render(&self, rows: &[Vec<String>], widths: &[usize]) -> Result<String>;
}

/// `tabled`-backed renderer with `┌─┬┐` style borders
#[derive(Debug, Clone, Copy, Default)]
pub struct TabledRenderer;

impl TableRenderer for TabledRenderer {
    fn render(&self, rows: &[Vec<String>], widths: &[usize]) -> Result<String> {
        let columns = validate_grid(rows)?;

        let mut builder = Builder::default();
        for row in rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();
        table.with(Style::modern());
        if palette::enabled() {
            let (prefix, suffix) = palette::DIM;
            table.with(BorderColor::filled(Color::new(prefix, suffix)));
        }
        for (index, width) in widths.iter().copied().enumerate().take(columns) {
            table.modify(Columns::one(index), Width::wrap(width));
            table.modify(Columns::one(index), Width::increase(width));
        }

        Ok(table.to_string())
    }
}

/// Check the grid is non-empty and rectangular, returning its width
pub fn validate_grid(rows: &[Vec<String>]) -> Result<usize> {
    let first = rows.first().ok_or_else(|| {
        ReqtableError::RenderFailure("table must define at least one row".to_string())
    })?;

    let columns = first.len();
    if columns == 0 {
        return Err(ReqtableError::RenderFailure(
            "table must define at least one column".to_string(),
        ));
    }

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(ReqtableError::RenderFailure(format!(
            "row {index} has {} cells, expected {columns}",
            row.len()
        )));
    }

    Ok(columns)
}
