//! Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{MutableShape, Rect};
use super::table::MutableTable;

/// A mutable slide in a presentation.
///
/// Shape IDs start at 2; ID 1 belongs to the slide's shape tree.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier in presentation.xml, starts at 256)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Whether the slide has been modified
    pub(crate) modified: bool,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            modified: false,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    /// Add a text box and return it for formatting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wallcal::ooxml::pptx::{Alignment, MutablePresentation};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    /// slide
    ///     .add_text_box("March 2026", 914400, 914400, 2779776, 274320)
    ///     .font("Arial")
    ///     .font_size(12.0)
    ///     .bold(true)
    ///     .alignment(Alignment::Center);
    /// assert_eq!(slide.shape_count(), 1);
    /// ```
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(
            self.next_shape_id(),
            text.to_string(),
            Rect::new(x, y, width, height),
        );
        self.push_shape(shape)
    }

    /// Place a table in a graphic frame at the given position.
    pub fn add_table(
        &mut self,
        table: MutableTable,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape =
            MutableShape::new_table(self.next_shape_id(), table, Rect::new(x, y, width, height));
        self.push_shape(shape)
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        self.modified = true;
        &mut self.shapes[index]
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties of the tree itself (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
