//! Unified error type.
//!
//! Package and document level failures keep their own error enums inside
//! [`crate::ooxml`]; this type wraps them together with the calendar and
//! configuration errors so the binary has a single error to report.

pub mod types;

pub use types::{Error, Result};
