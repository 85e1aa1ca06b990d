//! PowerPoint (.pptx) presentation writing.
//!
//! Builds PresentationML decks made of text boxes and tables on blank-layout
//! slides:
//!
//! ```rust
//! use wallcal::ooxml::pptx::{Alignment, MutablePresentation, MutableTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_text_box("Hello", 914400, 914400, 1828800, 457200)
//!     .alignment(Alignment::Center);
//!
//! let mut table = MutableTable::new(2, 2)?;
//! table.cell_mut(0, 0)?.set_text("A");
//! slide.add_table(table, 914400, 1828800, 1828800, 914400);
//!
//! let bytes = pres.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::{Alignment, TextFormat};
pub use writer::{MutablePresentation, MutableShape, MutableSlide, MutableTable, Rect, TableCell};
