//! Date markers for calendar presentation: holiday and has-entry.

use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct HolidayAnnotator {
    holidays: HashSet<NaiveDate>,
    entries: HashSet<NaiveDate>,
}

impl HolidayAnnotator {
    pub fn new<H, E>(holidays: H, entry_dates: E) -> Self
    where
        H: IntoIterator<Item = NaiveDate>,
        E: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
            entries: entry_dates.into_iter().collect(),
        }
    }

    pub fn has_entry(&self, date: &NaiveDate) -> bool {
        self.entries.contains(date)
    }

    pub fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_independent() {
        let d1 = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();

        let ann = HolidayAnnotator::new([d1, d2], [d2, d3]);

        assert!(ann.is_holiday(&d1) && !ann.has_entry(&d1));
        assert!(ann.is_holiday(&d2) && ann.has_entry(&d2));
        assert!(!ann.is_holiday(&d3) && ann.has_entry(&d3));
    }
}
