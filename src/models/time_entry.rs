use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One day of clock records for one user.
///
/// Maps 1:1 to a row of `time_entries`; `(user_id, entry_date)` is unique.
/// `total_hours` and `overtime_hours` are derived at save time and never
/// accepted as user input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: String,                     // ⇔ time_entries.user_id
    pub entry_date: NaiveDate,               // ⇔ entry_date (TEXT "YYYY-MM-DD")
    pub entry_time: Option<NaiveTime>,       // ⇔ entry_time (TEXT "HH:MM")
    pub lunch_exit_time: Option<NaiveTime>,  // ⇔ lunch_exit_time
    pub lunch_return_time: Option<NaiveTime>, // ⇔ lunch_return_time
    pub exit_time: Option<NaiveTime>,        // ⇔ exit_time
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Empty entry for a date, all clock fields unset.
    pub fn blank(user_id: &str, entry_date: NaiveDate) -> Self {
        Self {
            id: 0,
            user_id: user_id.to_string(),
            entry_date,
            entry_time: None,
            lunch_exit_time: None,
            lunch_return_time: None,
            exit_time: None,
            total_hours: 0.0,
            overtime_hours: 0.0,
            notes: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.entry_date.format("%Y-%m-%d").to_string()
    }

    /// True when the day counts as worked (strictly positive hours).
    pub fn is_worked(&self) -> bool {
        self.total_hours > 0.0
    }
}

/// Edit of one clock field: `None` keeps the stored value, `Some(None)`
/// clears it, `Some(Some(t))` sets it.
pub type ClockEdit = Option<Option<NaiveTime>>;

/// Fields a user may provide when saving a day.
///
/// `clear_lunch` drops both lunch fields before merging.
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub entry_time: ClockEdit,
    pub lunch_exit_time: ClockEdit,
    pub lunch_return_time: ClockEdit,
    pub exit_time: ClockEdit,
    pub notes: Option<String>,
    pub clear_lunch: bool,
}

impl EntryInput {
    pub fn is_empty(&self) -> bool {
        self.entry_time.is_none()
            && self.lunch_exit_time.is_none()
            && self.lunch_return_time.is_none()
            && self.exit_time.is_none()
            && self.notes.is_none()
            && !self.clear_lunch
    }

    /// Overlay this input on top of an existing (or blank) entry.
    pub fn merge_into(&self, mut entry: TimeEntry) -> TimeEntry {
        if self.clear_lunch {
            entry.lunch_exit_time = None;
            entry.lunch_return_time = None;
        }
        if let Some(t) = self.entry_time {
            entry.entry_time = t;
        }
        if let Some(t) = self.lunch_exit_time {
            entry.lunch_exit_time = t;
        }
        if let Some(t) = self.lunch_return_time {
            entry.lunch_return_time = t;
        }
        if let Some(t) = self.exit_time {
            entry.exit_time = t;
        }
        if let Some(n) = &self.notes {
            let trimmed = n.trim();
            entry.notes = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn merge_keeps_stored_fields_not_provided() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut stored = TimeEntry::blank("u1", date);
        stored.entry_time = Some(t("09:00"));
        stored.notes = Some("client visit".into());

        let input = EntryInput {
            exit_time: Some(Some(t("17:30"))),
            ..Default::default()
        };
        let merged = input.merge_into(stored);

        assert_eq!(merged.entry_time, Some(t("09:00")));
        assert_eq!(merged.exit_time, Some(t("17:30")));
        assert_eq!(merged.notes.as_deref(), Some("client visit"));
    }

    #[test]
    fn clear_lunch_drops_both_lunch_fields_and_blank_notes_clear() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut stored = TimeEntry::blank("u1", date);
        stored.lunch_exit_time = Some(t("13:00"));
        stored.lunch_return_time = Some(t("14:00"));
        stored.notes = Some("x".into());

        let input = EntryInput {
            clear_lunch: true,
            notes: Some("   ".into()),
            ..Default::default()
        };
        let merged = input.merge_into(stored);

        assert!(merged.lunch_exit_time.is_none());
        assert!(merged.lunch_return_time.is_none());
        assert!(merged.notes.is_none());
    }

    #[test]
    fn explicit_empty_clears_a_single_field() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut stored = TimeEntry::blank("u1", date);
        stored.entry_time = Some(t("09:00"));
        stored.exit_time = Some(t("08:00"));

        let input = EntryInput {
            exit_time: Some(None),
            ..Default::default()
        };
        assert!(!input.is_empty());

        let merged = input.merge_into(stored);
        assert_eq!(merged.entry_time, Some(t("09:00")));
        assert!(merged.exit_time.is_none());
    }
}
