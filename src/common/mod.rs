//! Common types and utilities shared across the crate.

pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
pub use style::RGBColor;
