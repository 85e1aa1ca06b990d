//! Open Packaging Conventions (OPC), write side.
//!
//! Just enough of the OPC model to emit a valid package:
//!
//! - Part names and relationship-part URIs
//! - Per-part and package-level relationships
//! - Content type registration
//! - ZIP-based physical packaging

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{Part, XmlPart};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
