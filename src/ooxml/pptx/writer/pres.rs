//! Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships, XmlPart};
use crate::ooxml::pptx::template;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

const APPLICATION: &str = "wallcal";

/// A mutable PowerPoint presentation for writing.
///
/// Holds the slides and document properties; [`save`](Self::save) assembles
/// the full package (master, layout, theme, properties) around them.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title (`dc:title`)
    title: Option<String>,
    /// Creation timestamp written to the core properties; defaults to now
    created: Option<DateTime<Utc>>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: None,
            created: None,
        }
    }

    /// Add a new blank slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Fix the creation timestamp, e.g. for reproducible output.
    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = Some(created);
    }

    pub fn is_modified(&self) -> bool {
        !self.slides.is_empty()
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let layout_uri = PackURI::new(SLIDE_LAYOUT_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        let core_uri = PackURI::new(CORE_PROPS_URI)?;
        let app_uri = PackURI::new(APP_PROPS_URI)?;

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        // presentation.xml needs the rIds before its XML can be written
        let mut pres_rels = Relationships::new(pres_uri.base_uri().to_string());
        let master_rel_id = pres_rels
            .get_or_add(rt::SLIDE_MASTER, &master_uri)
            .to_string();
        let mut slide_parts = Vec::with_capacity(self.slides.len());
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());

        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_rels.get_or_add(rt::SLIDE, &slide_uri).to_string());

            let mut slide_part = XmlPart::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            debug!(
                "slide {} has {} shapes",
                slide_part.partname(),
                slide.shape_count()
            );
            slide_parts.push(slide_part);
        }
        pres_rels.get_or_add(rt::THEME, &theme_uri);

        let pres_xml = self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?;
        let mut pres_part = XmlPart::new(pres_uri, ct::PML_PRESENTATION_MAIN, pres_xml);
        *pres_part.rels_mut() = pres_rels;
        package.add_part(Box::new(pres_part))?;

        let mut master_part = XmlPart::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML.to_string(),
        );
        // The master XML refers to its layout as rId1, so it must be related first
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        package.add_part(Box::new(master_part))?;

        let mut layout_part = XmlPart::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::BLANK_LAYOUT_XML.to_string(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(Box::new(layout_part))?;

        package.add_part(Box::new(XmlPart::new(
            theme_uri,
            ct::OFC_THEME,
            template::THEME_XML.to_string(),
        )))?;

        for slide_part in slide_parts {
            package.add_part(Box::new(slide_part))?;
        }

        let created = self.created.unwrap_or_else(Utc::now);
        package.add_part(Box::new(XmlPart::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(self.title().unwrap_or(""), APPLICATION, created),
        )))?;
        package.add_part(Box::new(XmlPart::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(APPLICATION, self.slides.len()),
        )))?;

        Ok(package)
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Write the presentation to a stream.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write_to_stream(writer, &package)?;
        Ok(())
    }

    /// Save the presentation to a .pptx file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let package = self.to_package()?;
        package.save(path)?;
        info!(
            "wrote {} ({} parts, {} slides)",
            path.display(),
            package.part_count(),
            self.slides.len()
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
