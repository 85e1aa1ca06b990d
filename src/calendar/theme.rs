//! Header color themes.
//!
//! Twelve fixed themes, identified by the number shown in the interactive
//! menu. A theme only colors the weekday header row of each month grid; the
//! header text switches between white and black depending on how dark the
//! fill is.

use crate::common::RGBColor;
use log::warn;
use phf::phf_map;
use std::fmt;

/// Menu group a theme is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cool,
    Warm,
    Neutral,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Cool, Tone::Warm, Tone::Neutral];

    /// Heading used in the theme menu.
    pub fn heading(&self) -> &'static str {
        match self {
            Tone::Cool => "Cool Tones",
            Tone::Warm => "Warm Tones",
            Tone::Neutral => "Neutral/Monochrome",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub color: RGBColor,
    pub tone: Tone,
    /// Extra description shown next to the name in the menu
    hint: Option<&'static str>,
}

impl Theme {
    const fn new(id: &'static str, name: &'static str, rgb: (u8, u8, u8), tone: Tone) -> Self {
        Self {
            id,
            name,
            color: RGBColor::new(rgb.0, rgb.1, rgb.2),
            tone,
            hint: None,
        }
    }

    const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Header text color: white on dark fills, black on light ones.
    pub fn header_text_color(&self) -> RGBColor {
        self.color.contrasting_text()
    }

    /// Label shown in the interactive menu, e.g. "Blue (Sky Blue)".
    pub fn menu_label(&self) -> String {
        match self.hint {
            Some(hint) => format!("{} ({})", self.name, hint),
            None => self.name.to_string(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.menu_label())
    }
}

/// ID of the theme used when no choice is made.
pub const DEFAULT_THEME_ID: &str = "1";

static THEMES: [Theme; 12] = [
    Theme::new("1", "Blue", (70, 130, 180), Tone::Cool).with_hint("Sky Blue"),
    Theme::new("2", "Navy", (31, 73, 125), Tone::Cool).with_hint("Professional Blue"),
    Theme::new("3", "Teal", (0, 128, 128), Tone::Cool),
    Theme::new("4", "Purple", (147, 112, 219), Tone::Cool),
    Theme::new("5", "Green", (34, 139, 34), Tone::Warm),
    Theme::new("6", "Orange", (255, 140, 0), Tone::Warm),
    Theme::new("7", "Red", (205, 92, 92), Tone::Warm),
    Theme::new("8", "Pink", (219, 112, 147), Tone::Warm),
    Theme::new("9", "Gray", (128, 128, 128), Tone::Neutral),
    Theme::new("10", "Dark Gray", (64, 64, 64), Tone::Neutral),
    Theme::new("11", "Black", (0, 0, 0), Tone::Neutral),
    Theme::new("12", "White", (255, 255, 255), Tone::Neutral),
];

static THEME_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "1" => 0,
    "2" => 1,
    "3" => 2,
    "4" => 3,
    "5" => 4,
    "6" => 5,
    "7" => 6,
    "8" => 7,
    "9" => 8,
    "10" => 9,
    "11" => 10,
    "12" => 11,
};

/// All themes in menu order.
pub fn all() -> impl Iterator<Item = &'static Theme> {
    THEMES.iter()
}

/// Themes listed under one menu heading.
pub fn by_tone(tone: Tone) -> impl Iterator<Item = &'static Theme> {
    THEMES.iter().filter(move |t| t.tone == tone)
}

/// Exact lookup by menu number.
pub fn lookup(id: &str) -> Option<&'static Theme> {
    THEME_INDEX.get(id.trim()).map(|&index| &THEMES[index])
}

/// Lookup by menu number, then by display name ignoring case.
pub fn find(choice: &str) -> Option<&'static Theme> {
    let choice = choice.trim();
    lookup(choice).or_else(|| THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(choice)))
}

pub fn default_theme() -> &'static Theme {
    &THEMES[THEME_INDEX[DEFAULT_THEME_ID]]
}

/// Resolve a user's choice to a theme. An empty choice selects the default;
/// an unknown one logs a warning and also selects the default.
pub fn resolve(choice: &str) -> &'static Theme {
    let choice = choice.trim();
    if choice.is_empty() {
        return default_theme();
    }

    match find(choice) {
        Some(theme) => theme,
        None => {
            warn!(
                "Invalid choice {:?}, using {} theme",
                choice,
                default_theme().name
            );
            default_theme()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete_and_ordered() {
        let ids: Vec<&str> = all().map(|t| t.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]);
        for theme in all() {
            assert_eq!(lookup(theme.id), Some(theme));
        }
    }

    #[test]
    fn test_lookup() {
        let teal = lookup("3").unwrap();
        assert_eq!(teal.name, "Teal");
        assert_eq!(teal.color, RGBColor::new(0, 128, 128));
        assert_eq!(lookup(" 10 ").map(|t| t.name), Some("Dark Gray"));
        assert!(lookup("13").is_none());
        assert!(lookup("0").is_none());
        assert!(lookup("Blue").is_none());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("dark gray").map(|t| t.id), Some("10"));
        assert_eq!(find("ORANGE").map(|t| t.id), Some("6"));
        assert!(find("magenta").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_blue() {
        assert_eq!(resolve("").name, "Blue");
        assert_eq!(resolve("   ").name, "Blue");
        assert_eq!(resolve("42").name, "Blue");
        assert_eq!(resolve("8").name, "Pink");
    }

    #[test]
    fn test_header_text_color() {
        let white_text = ["1", "2", "3", "5", "7", "10", "11"];
        let black_text = ["4", "6", "8", "9", "12"];
        for id in white_text {
            assert_eq!(lookup(id).unwrap().header_text_color(), RGBColor::WHITE, "theme {}", id);
        }
        for id in black_text {
            assert_eq!(lookup(id).unwrap().header_text_color(), RGBColor::BLACK, "theme {}", id);
        }
    }

    #[test]
    fn test_menu_groups() {
        assert_eq!(by_tone(Tone::Cool).count(), 4);
        assert_eq!(by_tone(Tone::Warm).count(), 4);
        assert_eq!(by_tone(Tone::Neutral).count(), 4);
        assert_eq!(lookup("2").unwrap().to_string(), "2. Navy (Professional Blue)");
        assert_eq!(lookup("3").unwrap().to_string(), "3. Teal");
    }
}
