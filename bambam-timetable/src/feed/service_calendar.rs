//! service calendars built from GTFS calendar.txt and calendar_dates.txt.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Determines which days a transit service operates
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceCalendar {
    pub service_id: String,

    // regular schedule from calendar.txt, if listed
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub weekdays: WeekdayFlags,

    // exceptions from calendar_dates.txt
    pub added_dates: BTreeSet<NaiveDate>,
    pub removed_dates: BTreeSet<NaiveDate>,
}

/// Compact representation of which weekdays a service runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayFlags {
    flags: u8,
}

impl WeekdayFlags {
    pub fn new() -> Self {
        Self { flags: 0 }
    }

    pub fn all() -> Self {
        Self::from_bools(true, true, true, true, true, true, true)
    }

    pub fn set(&mut self, weekday: Weekday) {
        self.flags |= 1 << weekday.number_from_monday();
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        (self.flags & (1 << weekday.number_from_monday())) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }

    pub fn from_bools(
        mon: bool,
        tue: bool,
        wed: bool,
        thu: bool,
        fri: bool,
        sat: bool,
        sun: bool,
    ) -> Self {
        let mut flags = Self::new();
        let days = [
            (mon, Weekday::Mon),
            (tue, Weekday::Tue),
            (wed, Weekday::Wed),
            (thu, Weekday::Thu),
            (fri, Weekday::Fri),
            (sat, Weekday::Sat),
            (sun, Weekday::Sun),
        ];
        for (runs, weekday) in days {
            if runs {
                flags.set(weekday);
            }
        }
        flags
    }
}

impl ServiceCalendar {
    /// a service with no regular schedule and no exceptions. it never runs until a
    /// date range or an added date is given.
    pub fn new(service_id: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_date_range(
        mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekdays: WeekdayFlags,
    ) -> Self {
        self.date_range = Some((start_date, end_date));
        self.weekdays = weekdays;
        self
    }

    pub fn add_date(&mut self, date: NaiveDate) {
        self.added_dates.insert(date);
    }

    pub fn remove_date(&mut self, date: NaiveDate) {
        self.removed_dates.insert(date);
    }

    /// Check if the service runs on a given date
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        if self.added_dates.contains(&date) {
            return true;
        }
        if self.removed_dates.contains(&date) {
            return false;
        }
        match self.date_range {
            Some((start, end)) if start <= date && date <= end => {
                self.weekdays.contains(date.weekday())
            }
            _ => false,
        }
    }

    /// the earliest date listed for this service: the start of its calendar range or
    /// its first added date, whichever comes first. the service need not run on it.
    pub fn start_date(&self) -> Option<NaiveDate> {
        let first_added = self.added_dates.iter().next().copied();
        let range_start = self.date_range.map(|(start, _)| start);
        match (first_added, range_start) {
            (Some(a), Some(r)) => Some(a.min(r)),
            (a, r) => a.or(r),
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, Weekday};

    use super::{ServiceCalendar, WeekdayFlags};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
    }

    fn weekday_calendar() -> ServiceCalendar {
        let mut calendar = ServiceCalendar::new("weekday").with_date_range(
            date(2024, 1, 1),
            date(2024, 12, 31),
            WeekdayFlags::from_bools(true, true, true, true, true, false, false),
        );
        calendar.add_date(date(2024, 7, 6)); // a Saturday
        calendar.remove_date(date(2024, 1, 1)); // New Year's Day, a Monday
        calendar
    }

    #[test]
    fn test_weekday_flags() {
        let flags = WeekdayFlags::from_bools(true, false, true, false, true, false, false);
        assert!(flags.contains(Weekday::Mon));
        assert!(!flags.contains(Weekday::Tue));
        assert!(flags.contains(Weekday::Wed));
        assert!(!flags.contains(Weekday::Sun));
        assert!(WeekdayFlags::new().is_empty());
    }

    #[test]
    fn test_runs_on() {
        let calendar = weekday_calendar();
        assert!(calendar.runs_on(date(2024, 1, 2))); // Tuesday
        assert!(!calendar.runs_on(date(2024, 1, 6))); // Saturday
        assert!(!calendar.runs_on(date(2024, 1, 1))); // removed
        assert!(calendar.runs_on(date(2024, 7, 6))); // added
        assert!(!calendar.runs_on(date(2025, 1, 1))); // out of range
    }

    #[test]
    fn test_start_date_is_range_start_even_when_removed() {
        let calendar = weekday_calendar();
        assert_eq!(calendar.start_date(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_start_date_of_weekday_range_starting_saturday() {
        // 2024-03-02 is a saturday, the service first runs on monday 2024-03-04
        let calendar = ServiceCalendar::new("weekday").with_date_range(
            date(2024, 3, 2),
            date(2024, 3, 31),
            WeekdayFlags::from_bools(true, true, true, true, true, false, false),
        );
        assert!(!calendar.runs_on(date(2024, 3, 2)));
        assert_eq!(calendar.start_date(), Some(date(2024, 3, 2)));
    }

    #[test]
    fn test_start_date_of_added_dates() {
        let mut calendar = ServiceCalendar::new("special");
        calendar.add_date(date(2024, 5, 20));
        calendar.add_date(date(2024, 3, 1));
        assert_eq!(calendar.start_date(), Some(date(2024, 3, 1)));

        let mut mixed = weekday_calendar();
        mixed.add_date(date(2023, 12, 30));
        assert_eq!(mixed.start_date(), Some(date(2023, 12, 30)));
        assert!(ServiceCalendar::new("never").start_date().is_none());
    }
}
