//! Office Open XML writing.
//!
//! - [`opc`]: the package container (parts, relationships, ZIP)
//! - [`pptx`]: PresentationML slides with text boxes and tables

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
