//! DrawingML tables for PPTX slides.
//!
//! A table lives inside a `p:graphicFrame`. Columns split the frame width
//! evenly and rows split its height evenly; any remainder EMUs go to the last
//! column and row so the grid fills the frame exactly.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::super::format::{Alignment, TextFormat};
use super::shape::Rect;

/// Built-in "Medium Style 2 - Accent 1", the style PowerPoint gives new tables.
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    text: String,
    format: TextFormat,
    fill: Option<RGBColor>,
}

impl TableCell {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    /// Solid background fill; `None` falls back to the table style.
    pub fn set_fill(&mut self, fill: Option<RGBColor>) -> &mut Self {
        self.fill = fill;
        self
    }

    pub fn font(&mut self, font: &str) -> &mut Self {
        self.format.font = Some(font.to_string());
        self
    }

    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.format.color = Some(color);
        self
    }

    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.format.alignment = Some(alignment);
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc>");
        xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
        self.format.write_paragraph(xml, &self.text)?;
        xml.push_str("</a:txBody>");

        match self.fill {
            Some(fill) => write!(
                xml,
                r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:tcPr>"#,
                fill.to_hex()
            )?,
            None => xml.push_str("<a:tcPr/>"),
        }

        xml.push_str("</a:tc>");
        Ok(())
    }
}

/// A table with a fixed number of rows and columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableTable {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<TableCell>,
}

impl MutableTable {
    /// Create an empty `rows` x `cols` table. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "table must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![TableCell::default(); rows * cols],
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&TableCell> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        let index = self.index(row, col)?;
        Ok(&mut self.cells[index])
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(OoxmlError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Split `total` into `parts` integer sizes; the last one takes the remainder.
    fn split_evenly(total: i64, parts: usize) -> Vec<i64> {
        let parts_i = parts as i64;
        let base = total / parts_i;
        let mut sizes = vec![base; parts];
        if let Some(last) = sizes.last_mut() {
            *last += total - base * parts_i;
        }
        sizes
    }

    /// Write the `p:graphicFrame` holding this table.
    pub(crate) fn to_xml(&self, xml: &mut String, shape_id: u32, rect: Rect) -> Result<()> {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Table {}"/>"#,
            shape_id,
            shape_id.saturating_sub(1)
        )?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        rect.write_offset_extent(xml)?;
        xml.push_str("</p:xfrm>");

        xml.push_str("<a:graphic>");
        write!(xml, r#"<a:graphicData uri="{}">"#, namespace::DML_TABLE)?;
        xml.push_str("<a:tbl>");

        // Header row styling and row banding from the table style
        write!(
            xml,
            r#"<a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
            DEFAULT_TABLE_STYLE_ID
        )?;

        xml.push_str("<a:tblGrid>");
        for width in Self::split_evenly(rect.width, self.cols) {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        let row_heights = Self::split_evenly(rect.height, self.rows);
        for (row_cells, height) in self.cells.chunks(self.cols).zip(row_heights) {
            write!(xml, r#"<a:tr h="{}">"#, height)?;
            for cell in row_cells {
                cell.to_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData>");
        xml.push_str("</a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}
