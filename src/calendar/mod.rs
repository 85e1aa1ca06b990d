//! Year calendar generation.
//!
//! [`month`] computes where each day falls, [`layout`] positions the twelve
//! month grids on the slide, [`theme`] supplies the header colors and
//! [`builder`] turns all of it into a presentation.

pub mod builder;
pub mod layout;
pub mod month;
pub mod theme;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;
/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

pub use builder::{CalendarOptions, build_year_calendar, default_output_name, write_year_calendar};
pub use layout::Layout;
pub use month::{MonthDescriptor, year_months};
pub use theme::{Theme, Tone};
