//! Assembles the one-slide year calendar.
use crate::common::unit::{MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT};
use crate::common::{Error, Result};
use crate::ooxml::pptx::{Alignment, MutablePresentation, MutableSlide, MutableTable};
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::layout::Layout;
use super::month::{DAYS_PER_WEEK, MonthDescriptor, WEEKDAY_LABELS, year_months};
use super::theme::{self, Theme};

pub const DEFAULT_FONT: &str = "Arial";
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// Everything that varies between generated calendars.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    pub year: i32,
    pub theme: &'static Theme,
    pub font: String,
    pub font_size_pt: f64,
    pub layout: Layout,
}

impl CalendarOptions {
    /// Blue theme, 12pt Arial, widescreen layout.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            theme: theme::default_theme(),
            font: DEFAULT_FONT.to_string(),
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            layout: Layout::widescreen(),
        }
    }

    pub fn with_theme(mut self, theme: &'static Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Font sizes DrawingML can store: 1 to 4000 points.
pub fn check_font_size(size_pt: f64) -> Result<()> {
    if (MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT).contains(&size_pt) {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "font size must be between {} and {} points, got {}",
            MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT, size_pt
        )))
    }
}

/// `Calendar_{year}.pptx`
pub fn default_output_name(year: i32) -> String {
    format!("Calendar_{}.pptx", year)
}

/// Build the presentation: one blank slide with a title and a day grid for
/// each of the twelve months.
pub fn build_year_calendar(opts: &CalendarOptions) -> Result<MutablePresentation> {
    let months = year_months(opts.year)?;
    let layout = &opts.layout;
    layout.check(months.len())?;
    check_font_size(opts.font_size_pt)?;

    let mut pres = MutablePresentation::new();
    pres.set_slide_width(layout.slide_width);
    pres.set_slide_height(layout.slide_height);
    pres.set_title(&format!("Calendar {}", opts.year));

    let slide = pres.add_slide();
    for (index, month) in months.iter().enumerate() {
        add_month(slide, opts, index, month)?;
    }

    Ok(pres)
}

fn add_month(
    slide: &mut MutableSlide,
    opts: &CalendarOptions,
    index: usize,
    month: &MonthDescriptor,
) -> Result<()> {
    let layout = &opts.layout;
    debug!(
        "{}: starts at column {}, {} weeks",
        month.name,
        month.start_column(),
        month.weeks_needed()
    );

    let title = layout.title_rect(index);
    slide
        .add_text_box(&month.title(opts.year), title.x, title.y, title.width, title.height)
        .word_wrap(true)
        .font(&opts.font)
        .font_size(opts.font_size_pt)
        .bold(true)
        .alignment(Alignment::Center);

    let mut table = MutableTable::new(month.table_rows(), DAYS_PER_WEEK)?;
    let header_text = opts.theme.header_text_color();
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        table
            .cell_mut(0, col)?
            .set_text(label)
            .set_fill(Some(opts.theme.color))
            .font(&opts.font)
            .font_size(opts.font_size_pt)
            .bold(true)
            .color(header_text)
            .alignment(Alignment::Center);
    }

    for (offset, day) in month.cells().into_iter().enumerate() {
        let text = day.map(|d| d.to_string()).unwrap_or_default();
        table
            .cell_mut(1 + offset / DAYS_PER_WEEK, offset % DAYS_PER_WEEK)?
            .set_text(&text)
            .font(&opts.font)
            .font_size(opts.font_size_pt)
            .alignment(Alignment::Center);
    }

    let rect = layout.table_rect(index);
    slide.add_table(table, rect.x, rect.y, rect.width, rect.height);
    Ok(())
}

/// Build and save the calendar, returning the path written.
pub fn write_year_calendar<P: AsRef<Path>>(opts: &CalendarOptions, path: P) -> Result<PathBuf> {
    let path = path.as_ref().to_path_buf();
    let pres = build_year_calendar(opts)?;
    pres.save(&path)?;
    info!(
        "Saved {} calendar for {} to {}",
        opts.theme.name,
        opts.year,
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    fn build(year: i32, theme_id: &str) -> MutablePresentation {
        let opts = CalendarOptions::new(year).with_theme(theme::lookup(theme_id).unwrap());
        build_year_calendar(&opts).unwrap()
    }

    #[test]
    fn test_single_slide_with_24_shapes() {
        let pres = build(2026, "1");
        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);
        assert_eq!(pres.title(), Some("Calendar 2026"));

        let shapes = pres.slides()[0].shapes();
        assert_eq!(shapes.len(), 24);
        assert_eq!(shapes[0].text(), Some("January 2026"));
        assert!(shapes[1].table().is_some());
        assert_eq!(shapes[22].text(), Some("December 2026"));
    }

    #[test]
    fn test_header_row() {
        let pres = build(2026, "6");
        let table = pres.slides()[0].shapes()[1].table().unwrap();
        let labels: Vec<&str> = (0..7).map(|c| table.cell(0, c).unwrap().text()).collect();
        assert_eq!(labels, WEEKDAY_LABELS);

        let header = table.cell(0, 0).unwrap();
        assert_eq!(header.fill(), Some(RGBColor::new(255, 140, 0)));
        assert_eq!(header.format().bold, Some(true));
        // Orange is light enough for black text
        assert_eq!(header.format().color, Some(RGBColor::BLACK));
    }

    #[test]
    fn test_day_cells() {
        let pres = build(2026, "2");
        let shapes = pres.slides()[0].shapes();

        // January 2026 starts on a Thursday
        let jan = shapes[1].table().unwrap();
        assert_eq!(jan.row_count(), 6);
        assert_eq!(jan.cell(1, 3).unwrap().text(), "");
        assert_eq!(jan.cell(1, 4).unwrap().text(), "1");
        assert_eq!(jan.cell(5, 6).unwrap().text(), "31");
        assert_eq!(jan.cell(1, 4).unwrap().fill(), None);
        assert_eq!(jan.cell(1, 4).unwrap().format().bold, None);

        // February 2026 fits in four weeks
        let feb = shapes[3].table().unwrap();
        assert_eq!(feb.row_count(), 5);
        assert_eq!(feb.cell(4, 6).unwrap().text(), "28");
    }

    #[test]
    fn test_shapes_follow_layout() {
        let opts = CalendarOptions::new(2026);
        let pres = build_year_calendar(&opts).unwrap();
        let shapes = pres.slides()[0].shapes();
        for index in 0..12 {
            assert_eq!(shapes[index * 2].rect(), opts.layout.title_rect(index));
            assert_eq!(shapes[index * 2 + 1].rect(), opts.layout.table_rect(index));
        }
    }

    #[test]
    fn test_invalid_year() {
        let opts = CalendarOptions::new(0);
        assert!(matches!(build_year_calendar(&opts), Err(Error::InvalidYear(0))));
    }

    #[test]
    fn test_layout_must_hold_every_month() {
        let mut opts = CalendarOptions::new(2026);
        opts.layout = Layout::new(12_191_695, 6_858_000, 2, 2);
        assert!(matches!(build_year_calendar(&opts), Err(Error::InvalidLayout(_))));

        // Zero columns is an error rather than a division by zero
        opts.layout = Layout::new(12_191_695, 6_858_000, 0, 3);
        assert!(matches!(build_year_calendar(&opts), Err(Error::InvalidLayout(_))));

        opts.layout = Layout::new(12_191_695 * 2, 6_858_000, 6, 2);
        let pres = build_year_calendar(&opts).unwrap();
        assert_eq!(pres.slides()[0].shape_count(), 24);
    }

    #[test]
    fn test_font_size_range() {
        assert!(check_font_size(1.0).is_ok());
        assert!(check_font_size(4000.0).is_ok());
        assert!(matches!(check_font_size(0.999), Err(Error::Config(_))));
        assert!(matches!(check_font_size(4000.5), Err(Error::Config(_))));
        assert!(check_font_size(f64::NAN).is_err());

        let mut opts = CalendarOptions::new(2026);
        opts.font_size_pt = 0.001;
        assert!(matches!(build_year_calendar(&opts), Err(Error::Config(_))));
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(default_output_name(2026), "Calendar_2026.pptx");
    }
}
