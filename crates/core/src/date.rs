//! Day-granularity expiration dates.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A calendar day stored as raw components.
///
/// Components are kept exactly as supplied: `month` is 1-based and `day` is
/// the day of the month, but neither is range checked. A `CardDate` is `Copy`,
/// so every hand-off into or out of a card is a fresh value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardDate {
    year: i32,
    month: u32,
    day: u32,
}

impl ValueObject for CardDate {}

impl CardDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Copy the year, month and day out of any chrono date-like value.
    ///
    /// Time of day, offsets and anything finer than a day are dropped.
    pub fn from_datelike<D: Datelike>(date: &D) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        Self::from_datelike(&Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The chrono view of this day, or `None` if the components do not name a
    /// real calendar day (e.g. month 13).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn is_valid(&self) -> bool {
        self.to_naive_date().is_some()
    }

    /// True when this day is strictly earlier than `other`.
    ///
    /// Ordering is lexicographic on (year, month, day), which also works for
    /// components that are out of calendar range.
    pub fn is_before(&self, other: &CardDate) -> bool {
        self < other
    }
}

impl From<NaiveDate> for CardDate {
    fn from(value: NaiveDate) -> Self {
        Self::from_datelike(&value)
    }
}

impl core::fmt::Display for CardDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn from_datelike_drops_time_of_day() {
        let instant = Utc.with_ymd_and_hms(2027, 3, 14, 23, 59, 58).unwrap();
        let date = CardDate::from_datelike(&instant);
        assert_eq!(date, CardDate::new(2027, 3, 14));
    }

    #[test]
    fn ordering_is_year_then_month_then_day() {
        let d = CardDate::new(2026, 6, 15);
        assert!(CardDate::new(2025, 12, 31).is_before(&d));
        assert!(CardDate::new(2026, 5, 31).is_before(&d));
        assert!(CardDate::new(2026, 6, 14).is_before(&d));
        assert!(!d.is_before(&d));
        assert!(!CardDate::new(2026, 6, 16).is_before(&d));
    }

    #[test]
    fn out_of_range_components_are_kept_but_not_valid() {
        let date = CardDate::new(2026, 13, 40);
        assert_eq!(date.month(), 13);
        assert_eq!(date.day(), 40);
        assert!(!date.is_valid());
        assert_eq!(date.to_naive_date(), None);
    }

    #[test]
    fn naive_date_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        let date = CardDate::from(naive);
        assert_eq!(date.to_naive_date(), Some(naive));
        assert_eq!(date.to_string(), "2028-02-29");
    }
}
