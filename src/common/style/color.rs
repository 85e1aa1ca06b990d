//! RGB color representation.
use std::fmt;

/// RGB color with 8-bit components.
///
/// # Examples
///
/// ```rust
/// use wallcal::common::RGBColor;
///
/// let steel_blue = RGBColor::new(70, 130, 180);
/// assert_eq!(steel_blue.to_hex(), "4682B4");
///
/// let navy = RGBColor::from_hex("#1F497D").unwrap();
/// assert_eq!(navy, RGBColor::new(31, 73, 125));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string ("FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an upper-case hex string without the `#` prefix, as used in
    /// DrawingML `srgbClr/@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 luma weights).
    #[inline]
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Text color that stays readable on top of this color: white on dark
    /// backgrounds (brightness below 128), black otherwise.
    pub fn contrasting_text(&self) -> RGBColor {
        if self.brightness() < 128.0 {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
