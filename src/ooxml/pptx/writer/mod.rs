//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{MutableShape, Rect};
pub use slide::MutableSlide;
pub use table::{MutableTable, TableCell};
