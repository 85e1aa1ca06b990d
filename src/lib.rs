//! Wallcal - one-slide PowerPoint wall calendars
//!
//! Lays out all twelve months of a year on a single widescreen slide: a
//! 4 x 3 grid where every month has a bold title and a Sunday-first day table
//! whose header row takes the color of the selected theme.
//!
//! # Example
//!
//! ```no_run
//! use wallcal::calendar::{CalendarOptions, theme, write_year_calendar};
//!
//! # fn main() -> wallcal::Result<()> {
//! let teal = theme::resolve("3");
//! let opts = CalendarOptions::new(2026).with_theme(teal);
//! let path = write_year_calendar(&opts, "Calendar_2026.pptx")?;
//! println!("Saved calendar to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Building a deck in memory
//!
//! ```
//! use wallcal::calendar::{CalendarOptions, build_year_calendar};
//!
//! # fn main() -> wallcal::Result<()> {
//! let pres = build_year_calendar(&CalendarOptions::new(2026))?;
//! assert_eq!(pres.slide_count(), 1);
//! let bytes = pres.to_bytes()?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`calendar`]: month arithmetic, slide layout, themes and the builder
//! - [`config`]: command line, YAML config file and interactive prompts
//! - [`ooxml`]: write-only PresentationML and OPC packaging
//! - [`common`]: errors, colors, units and XML helpers

pub mod calendar;
pub mod common;
pub mod config;
pub mod ooxml;

pub use common::{Error, RGBColor, Result};
