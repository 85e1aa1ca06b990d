//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Layout code works in inches and points and converts at the edges.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs, truncating toward zero.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Smallest font size DrawingML accepts (`ST_TextFontSize`, 100 centipoints).
pub const MIN_FONT_SIZE_PT: f64 = 1.0;
/// Largest font size DrawingML accepts (400000 centipoints).
pub const MAX_FONT_SIZE_PT: f64 = 4000.0;

/// Font size in points to the hundredths-of-a-point value used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
