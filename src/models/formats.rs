//! Serde helpers for the persisted date and time-of-day formats

/// `due_date` is written as an ISO 8601 date-time at midnight UTC and read
/// back as the calendar date it names. Plain `YYYY-MM-DD` is accepted too.
pub mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_TIME_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(crate) fn parse(raw: &str) -> Result<NaiveDate, String> {
        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Ok(date_time.date_naive());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| format!("invalid due date '{}': {}", raw, e))
    }
}

/// Optional `HH:MM` local time of day. An empty string reads as absent.
pub mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.collect_str(&t.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid time '{}': {}", s, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_rfc3339_keeps_calendar_date() {
        let date = calendar_date::parse("2024-03-10T00:00:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_offset_date_time_uses_its_own_offset() {
        let date = calendar_date::parse("2024-03-10T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_plain_date() {
        let date = calendar_date::parse("2024-12-31").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(calendar_date::parse("tomorrow").is_err());
    }
}
