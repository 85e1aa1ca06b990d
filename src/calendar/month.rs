//! Per-month calendar facts.
//!
//! A [`MonthDescriptor`] is computed from `(year, month)` on the proleptic
//! Gregorian calendar and knows how the month fills a Sunday-first grid.

use crate::common::{Error, Result};
use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::{MAX_YEAR, MIN_YEAR};

pub const DAYS_PER_WEEK: usize = 7;

/// Header labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDescriptor {
    pub name: &'static str,
    /// Month number, 1-based
    pub month: u32,
    /// Weekday of the 1st
    pub first_weekday: Weekday,
    pub day_count: u32,
}

impl MonthDescriptor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        check_year(year)?;
        let month_enum = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(Error::InvalidMonth(month))?;

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth(month))?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(Error::InvalidMonth(month))?;

        Ok(Self {
            name: month_enum.name(),
            month,
            first_weekday: first.weekday(),
            day_count: last.day(),
        })
    }

    /// Grid column of the 1st, Sunday = 0.
    pub fn start_column(&self) -> usize {
        self.first_weekday.num_days_from_sunday() as usize
    }

    /// Number of week rows the month occupies (4 to 6).
    pub fn weeks_needed(&self) -> usize {
        let first_week_days = DAYS_PER_WEEK - self.start_column();
        let remaining = self.day_count as usize - first_week_days.min(self.day_count as usize);
        if remaining > 0 {
            1 + remaining.div_ceil(DAYS_PER_WEEK)
        } else {
            1
        }
    }

    /// Week rows plus the header row.
    pub fn table_rows(&self) -> usize {
        1 + self.weeks_needed()
    }

    /// Row-major day numbers for the week rows; `None` marks a blank cell.
    pub fn cells(&self) -> Vec<Option<u32>> {
        let start = self.start_column();
        (0..self.weeks_needed() * DAYS_PER_WEEK)
            .map(|index| {
                index
                    .checked_sub(start)
                    .map(|offset| offset as u32 + 1)
                    .filter(|&day| day <= self.day_count)
            })
            .collect()
    }

    pub fn title(&self, year: i32) -> String {
        format!("{} {}", self.name, year)
    }
}

pub fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::InvalidYear(year))
    }
}

/// Descriptors for January through December.
pub fn year_months(year: i32) -> Result<[MonthDescriptor; 12]> {
    check_year(year)?;
    let mut months = [MonthDescriptor::new(year, 1)?; 12];
    for (index, slot) in months.iter_mut().enumerate().skip(1) {
        *slot = MonthDescriptor::new(year, index as u32 + 1)?;
    }
    Ok(months)
}
