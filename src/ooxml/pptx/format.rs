//! Text format types for PPTX shapes and table cells.

use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    /// Get the attribute value used in DrawingML.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
        }
    }
}

/// Character and paragraph formatting for a single-run paragraph.
///
/// Unset fields are left out of the XML so the master's text styles apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
    /// Paragraph alignment
    pub alignment: Option<Alignment>,
}

impl TextFormat {
    /// Write `<a:p>` holding `text` with this format. Empty text writes an
    /// empty paragraph that still carries the end-of-paragraph run properties,
    /// so blank table cells keep the same font size as filled ones.
    pub(crate) fn write_paragraph(&self, xml: &mut String, text: &str) -> Result<()> {
        xml.push_str("<a:p>");

        if let Some(alignment) = self.alignment {
            write!(xml, r#"<a:pPr algn="{}"/>"#, alignment.as_ooxml())?;
        }

        if !text.is_empty() {
            xml.push_str("<a:r>");
            self.write_run_properties(xml, "a:rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(text))?;
            xml.push_str("</a:r>");
        }

        self.write_run_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
        Ok(())
    }

    fn write_run_properties(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(xml, r#"<{} lang="en-US""#, tag)?;

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = self.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');
        // Schema order: fill before fonts
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = self.font {
            let font = escape_xml(font);
            write!(
                xml,
                r#"<a:latin typeface="{0}"/><a:cs typeface="{0}"/>"#,
                font
            )?;
        }
        write!(xml, "</{}>", tag)?;
        Ok(())
    }
}
