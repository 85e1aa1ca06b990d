//! In-memory OPC package assembled before writing.
//!
//! Parts keep the order they were added in, which is also the order of the
//! ZIP members after `[Content_Types].xml` and the package relationships.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::path::Path;

pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// All parts in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part. Partnames must be unique within a package.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package to a part and return the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, partname).to_string()
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|b| &**b as &dyn Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Serialize the package and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::ooxml::opc::pkgwriter::PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::opc::part::XmlPart;

    fn presentation_part() -> Box<dyn Part> {
        Box::new(XmlPart::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        ))
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(presentation_part()).unwrap();
        let err = pkg.add_part(presentation_part()).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(ref name) if name == "/ppt/presentation.xml"));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_package_relationship() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pkg.relate_to(&partname, rt::OFFICE_DOCUMENT), "rId1");
        assert_eq!(
            pkg.rels().get("rId1").map(|r| r.target_ref()),
            Some("ppt/presentation.xml")
        );
    }
}
