//! Relationships between parts of an OPC package.
//!
//! Every part (and the package itself) owns a `Relationships` collection that
//! is serialized to its `.rels` part. Relationship IDs are allocated in order
//! ("rId1", "rId2", ...) so generated packages are reproducible.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships from a single source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to compute relative targets
    base_uri: String,

    /// Relationships in rId order
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty collection for a source whose directory is `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Relate the source to `target`, reusing an existing relationship of the
    /// same type and target. Returns the rId.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> &str {
        let target_ref = target.relative_ref(&self.base_uri);

        let existing = self
            .rels
            .iter()
            .position(|rel| rel.reltype == reltype && rel.target_ref == target_ref);

        let index = match existing {
            Some(index) => index,
            None => {
                let r_id = format!("rId{}", self.rels.len() + 1);
                self.rels
                    .push(Relationship::new(r_id, reltype.to_string(), target_ref));
                self.rels.len() - 1
            },
        };

        self.rels[index].r_id()
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        // Writing into a String cannot fail
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}
