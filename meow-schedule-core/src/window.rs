//! The rolling 3-week calendar window.
//!
//! A window always starts on the Sunday on or before its reference date and
//! covers [`WINDOW_DAYS`] consecutive days. The header month is taken from
//! the Saturday closing the first week, so the title switches to a new month
//! as soon as the first visible week has entered it.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::{HEADER_DAY_INDEX, WINDOW_DAYS};
use crate::error::{ScheduleError, ScheduleResult};
use crate::session::Session;

/// Year and month shown as the calendar title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMonth {
    pub year: i32,
    pub month: u32,
}

impl HeaderMonth {
    fn of(date: NaiveDate) -> Self {
        HeaderMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// 21 consecutive dates, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    dates: Vec<NaiveDate>,
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_current_month: bool,
    pub sessions: Vec<&'a Session>,
}

impl CalendarWindow {
    /// Fails only when the window would run past the range `NaiveDate` can represent.
    pub fn anchored_at(reference: NaiveDate) -> ScheduleResult<Self> {
        let back = i64::from(reference.weekday().num_days_from_sunday());
        let start = reference
            .checked_sub_signed(Duration::days(back))
            .ok_or(ScheduleError::DateOutOfRange(reference))?;
        let dates = (0..WINDOW_DAYS)
            .map(|i| {
                start
                    .checked_add_signed(Duration::days(i))
                    .ok_or(ScheduleError::DateOutOfRange(reference))
            })
            .collect::<ScheduleResult<Vec<_>>>()?;
        Ok(CalendarWindow { dates })
    }

    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start()..=self.end()).contains(&date)
    }

    pub fn header_month(&self) -> HeaderMonth {
        HeaderMonth::of(self.dates[HEADER_DAY_INDEX])
    }

    /// The window split into Sunday-to-Saturday rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.dates.chunks(7)
    }

    /// Grid cells with the sessions falling on each date, in list order.
    pub fn days<'a>(&self, sessions: &'a [Session], today: NaiveDate) -> Vec<CalendarDay<'a>> {
        let header = self.header_month();
        self.dates
            .iter()
            .map(|&date| CalendarDay {
                date,
                is_today: date == today,
                is_current_month: header.contains(date),
                sessions: sessions.iter().filter(|s| s.date == date).collect(),
            })
            .collect()
    }
}

/// The user's position in the calendar, moved in whole windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    reference: NaiveDate,
}

impl CalendarCursor {
    pub fn new(reference: NaiveDate) -> Self {
        CalendarCursor { reference }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn window(&self) -> ScheduleResult<CalendarWindow> {
        CalendarWindow::anchored_at(self.reference)
    }

    /// Move by `steps` windows (negative moves back). The cursor is left
    /// where it was if the target date cannot be represented.
    pub fn shift(&mut self, steps: i64) -> ScheduleResult<()> {
        let reference = steps
            .checked_mul(WINDOW_DAYS)
            .and_then(Duration::try_days)
            .and_then(|delta| self.reference.checked_add_signed(delta))
            .ok_or(ScheduleError::DateOutOfRange(self.reference))?;
        self.reference = reference;
        Ok(())
    }

    pub fn next(&mut self) -> ScheduleResult<()> {
        self.shift(1)
    }

    pub fn previous(&mut self) -> ScheduleResult<()> {
        self.shift(-1)
    }
}
