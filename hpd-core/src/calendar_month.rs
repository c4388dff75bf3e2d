use crate::error::{HpdError, ParseError, Result};
use chrono::{Datelike, Months, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A calendar month. Day-of-month is irrelevant to production reporting, so
/// dates are truncated to month granularity; the canonical external form is
/// the first day of the month.
///
/// Held as that first day, so the derived `Ord` is chronological.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct CalendarMonth(NaiveDate);

impl CalendarMonth {
    /// Construct a month, rejecting non-positive years, months outside 1..=12
    /// and years past the last one `NaiveDate` can represent.
    pub fn new(year: i32, month: u32) -> Result<CalendarMonth> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|_| year > 0)
            .map(CalendarMonth)
            .ok_or(HpdError::InvalidDate { year, month })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Quarter of the year, 1..=4.
    pub fn quarter(&self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// The first day of this month as "YYYY-MM-01", the form the analytics API expects.
    pub fn api_date(&self) -> String {
        format!("{:04}-{:02}-01", self.year(), self.month())
    }

    /// The following month, `None` past the last representable month.
    pub fn succ(&self) -> Option<CalendarMonth> {
        self.0.checked_add_months(Months::new(1)).map(CalendarMonth)
    }
}

/// Total order over calendar months: `Less` means `a` is before `b`.
pub fn compare_months(a: &CalendarMonth, b: &CalendarMonth) -> Ordering {
    a.cmp(b)
}

impl TryFrom<NaiveDate> for CalendarMonth {
    type Error = HpdError;

    fn try_from(value: NaiveDate) -> Result<Self> {
        CalendarMonth::new(value.year(), value.month())
    }
}

impl From<CalendarMonth> for NaiveDate {
    fn from(value: CalendarMonth) -> Self {
        value.first_day()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Parses "YYYY-MM" or "YYYY-MM-DD"; the day, when present, is ignored.
impl FromStr for CalendarMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseError::new("calendar month", s);
        let mut parts = s.trim().splitn(3, '-');
        let year = parts
            .next()
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(err)?;
        let month = parts
            .next()
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(err)?;
        if let Some(day) = parts.next() {
            day.parse::<u32>().map_err(|_| err())?;
        }
        CalendarMonth::new(year, month).map_err(|_| err())
    }
}
