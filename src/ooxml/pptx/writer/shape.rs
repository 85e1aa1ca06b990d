//! Text box shapes for PPTX slides.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::{Alignment, TextFormat};
use super::table::MutableTable;

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Write `<a:off/><a:ext/>`.
    pub(crate) fn write_offset_extent(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) rect: Rect,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        format: TextFormat,
        word_wrap: bool,
    },
    Table(MutableTable),
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, text: String, rect: Rect) -> Self {
        Self {
            shape_id,
            rect,
            shape_type: ShapeType::TextBox {
                text,
                format: TextFormat::default(),
                word_wrap: false,
            },
        }
    }

    pub(crate) fn new_table(shape_id: u32, table: MutableTable, rect: Rect) -> Self {
        Self {
            shape_id,
            rect,
            shape_type: ShapeType::Table(table),
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Text of a text box, `None` for other shapes.
    pub fn text(&self) -> Option<&str> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            ShapeType::Table(_) => None,
        }
    }

    /// The table held by a graphic frame, `None` for other shapes.
    pub fn table(&self) -> Option<&MutableTable> {
        match &self.shape_type {
            ShapeType::Table(table) => Some(table),
            ShapeType::TextBox { .. } => None,
        }
    }

    fn text_format_mut(&mut self) -> Option<&mut TextFormat> {
        match &mut self.shape_type {
            ShapeType::TextBox { format, .. } => Some(format),
            ShapeType::Table(_) => None,
        }
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.font = Some(font.to_string());
        }
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.size = Some(size);
        }
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.bold = Some(bold);
        }
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.color = Some(color);
        }
        self
    }

    /// Builder method: set paragraph alignment.
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.alignment = Some(alignment);
        }
        self
    }

    /// Builder method: wrap text at the shape width instead of growing the shape.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let ShapeType::TextBox {
            word_wrap: ref mut w,
            ..
        } = self.shape_type
        {
            *w = wrap;
        }
        self
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                text,
                format,
                word_wrap,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id.saturating_sub(1)
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                self.rect.write_offset_extent(xml)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                let wrap = if *word_wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0">"#, wrap)?;
                xml.push_str("<a:spAutoFit/>");
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                format.write_paragraph(xml, text)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Table(table) => {
                table.to_xml(xml, self.shape_id, self.rect)?;
            },
        }

        Ok(())
    }
}
