//! Slide geometry for the month grid.
//!
//! All measurements are EMUs. The grid of calendars is centered on the
//! slide; margins stay fractional until a cell origin is computed, which
//! is then truncated to whole EMUs.

use crate::common::unit::inches_to_emu;
use crate::common::{Error, Result};
use crate::ooxml::pptx::Rect;

/// Placement of `columns * rows` equally sized calendars on one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub slide_width: i64,
    pub slide_height: i64,
    pub columns: usize,
    pub rows: usize,
    pub calendar_width: i64,
    pub calendar_height: i64,
    pub h_gutter: i64,
    pub v_gutter: i64,
    /// Height of the month title box above each table
    pub title_height: i64,
    /// Space between the title box and the table
    pub table_gap: i64,
}

impl Layout {
    /// 13.333" x 7.5" slide holding a 4 x 3 grid of 3.04" x 2" calendars.
    pub fn widescreen() -> Self {
        Self::new(inches_to_emu(13.333), inches_to_emu(7.5), 4, 3)
    }

    /// A custom grid using the standard calendar and gutter sizes.
    pub fn new(slide_width: i64, slide_height: i64, columns: usize, rows: usize) -> Self {
        Self {
            slide_width,
            slide_height,
            columns,
            rows,
            calendar_width: inches_to_emu(3.04),
            calendar_height: inches_to_emu(2.0),
            h_gutter: inches_to_emu(0.2),
            v_gutter: inches_to_emu(0.3),
            title_height: inches_to_emu(0.3),
            table_gap: inches_to_emu(0.02),
        }
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Check that `months` calendars fit on the slide without overlapping
    /// its edges.
    pub fn check(&self, months: usize) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(Error::InvalidLayout(format!(
                "grid must have at least one column and row, got {}x{}",
                self.columns, self.rows
            )));
        }
        if self.capacity() < months {
            return Err(Error::InvalidLayout(format!(
                "{}x{} grid holds {} calendars, need {}",
                self.columns,
                self.rows,
                self.capacity(),
                months
            )));
        }
        if self.total_width() > self.slide_width || self.total_height() > self.slide_height {
            return Err(Error::InvalidLayout(format!(
                "grid of {}x{} EMU does not fit a {}x{} EMU slide",
                self.total_width(),
                self.total_height(),
                self.slide_width,
                self.slide_height
            )));
        }
        Ok(())
    }

    pub fn total_width(&self) -> i64 {
        let cols = self.columns as i64;
        cols * self.calendar_width + (cols - 1).max(0) * self.h_gutter
    }

    pub fn total_height(&self) -> i64 {
        let rows = self.rows as i64;
        rows * self.calendar_height + (rows - 1).max(0) * self.v_gutter
    }

    pub fn margin_left(&self) -> f64 {
        (self.slide_width - self.total_width()) as f64 / 2.0
    }

    pub fn margin_top(&self) -> f64 {
        (self.slide_height - self.total_height()) as f64 / 2.0
    }

    /// Top-left corner of the calendar at `index`, filling rows left to right.
    pub fn cell_origin(&self, index: usize) -> (i64, i64) {
        let col = (index % self.columns) as i64;
        let row = (index / self.columns) as i64;
        let x = self.margin_left() + (col * (self.calendar_width + self.h_gutter)) as f64;
        let y = self.margin_top() + (row * (self.calendar_height + self.v_gutter)) as f64;
        (x as i64, y as i64)
    }

    pub fn title_rect(&self, index: usize) -> Rect {
        let (x, y) = self.cell_origin(index);
        Rect::new(x, y, self.calendar_width, self.title_height)
    }

    pub fn table_rect(&self, index: usize) -> Rect {
        let (x, y) = self.cell_origin(index);
        Rect::new(
            x,
            y + self.title_height + self.table_gap,
            self.calendar_width,
            self.calendar_height - self.title_height - self.table_gap,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::widescreen()
    }
}
