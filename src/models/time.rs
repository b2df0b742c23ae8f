use serde::{Deserialize, Serialize};

/// Day of the week. The scheduling domain covers all seven days.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Number of weekdays in the domain.
    pub const COUNT: usize = 7;

    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Zero-based position within the week (Mon = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        };
        write!(f, "{}", name)
    }
}

/// A weekly class meeting: a half-open minute-of-day interval on one weekday.
///
/// `start_minute` and `end_minute` count minutes from midnight (09:30 = 570).
/// The interval is half-open, so back-to-back slots (`end == next start`) do
/// not overlap. The `start < end` invariant is enforced when the catalog is
/// loaded, never re-checked here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: Weekday, start_minute: u32, end_minute: u32) -> Self {
        Self {
            day,
            start_minute,
            end_minute,
        }
    }

    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            format_minute_of_day(self.start_minute),
            format_minute_of_day(self.end_minute)
        )
    }
}

/// Formats a minute-of-day value as `HH:MM`.
pub fn format_minute_of_day(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index() {
        assert_eq!(Weekday::Mon.index(), 0);
        assert_eq!(Weekday::Sun.index(), 6);
    }

    #[test]
    fn test_weekday_all_in_order() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn test_weekday_serde_tags() {
        let json = serde_json::to_string(&Weekday::Wed).unwrap();
        assert_eq!(json, "\"wed\"");
        let back: Weekday = serde_json::from_str("\"fri\"").unwrap();
        assert_eq!(back, Weekday::Fri);
    }

    #[test]
    fn test_weekday_unknown_tag_rejected() {
        let result: Result<Weekday, _> = serde_json::from_str("\"funday\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_duration() {
        let slot = TimeSlot::new(Weekday::Mon, 540, 615);
        assert_eq!(slot.duration_minutes(), 75);
    }

    #[test]
    fn test_slot_display() {
        let slot = TimeSlot::new(Weekday::Tue, 570, 660);
        assert_eq!(slot.to_string(), "tue 09:30-11:00");
    }

    #[test]
    fn test_format_minute_of_day() {
        assert_eq!(format_minute_of_day(0), "00:00");
        assert_eq!(format_minute_of_day(615), "10:15");
        assert_eq!(format_minute_of_day(1439), "23:59");
    }
}
