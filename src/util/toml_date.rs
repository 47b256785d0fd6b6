use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseError};
use serde::{de, Deserialize, Serialize};
use serde::de::{MapAccess, Visitor};
use serde::de::value::MapAccessDeserializer;

// Code adapted from https://www.seachess.net/notes/toml-dates/
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TomlDate(pub NaiveDate);

fn date_from_toml(value: &toml::value::Datetime) -> Option<NaiveDate> {
    // Hugo accepts full date-times as well, only the date part matters here
    let date = value.date?;
    NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
}

/// Quoted dates, as written by `hugo new`. Date-times keep the date of their own offset.
fn date_from_str(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date_time.date());
        }
    }
    NaiveDate::from_str(value).ok()
}

struct TomlDateVisitor;

impl<'de> Visitor<'de> for TomlDateVisitor {
    type Value = TomlDate;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a TOML date or a date string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
    {
        date_from_str(value)
            .map(TomlDate)
            .ok_or_else(|| E::custom(format!("invalid date '{}'", value)))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
    {
        use serde::de::Error;
        let value = toml::value::Datetime::deserialize(MapAccessDeserializer::new(map))?;
        date_from_toml(&value)
            .map(TomlDate)
            .ok_or_else(|| A::Error::custom(format!("invalid date {}", value)))
    }
}

impl<'de> Deserialize<'de> for TomlDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TomlDateVisitor)
    }
}

impl Serialize for TomlDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl FromStr for TomlDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive = NaiveDate::from_str(s)?;
        Ok(Self(naive))
    }
}

impl Display for TomlDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    pub struct Post {
        pub date: TomlDate,
    }

    #[test]
    fn test_local_date() {
        let post: Post = toml::from_str("date = 2024-04-22").unwrap();
        assert_eq!(post.date, TomlDate(NaiveDate::from_ymd_opt(2024, 04, 22).unwrap()));
    }

    #[test]
    fn test_date_time_keeps_date() {
        let post: Post = toml::from_str("date = 2024-04-22T10:30:00-03:00").unwrap();
        assert_eq!(post.date, TomlDate(NaiveDate::from_ymd_opt(2024, 04, 22).unwrap()));
    }

    #[test]
    fn test_quoted_dates() {
        let expected = TomlDate(NaiveDate::from_ymd_opt(2025, 03, 18).unwrap());
        for doc in [
            "date = '2025-03-18T09:00:00-03:00'",
            "date = \"2025-03-18T23:30:00+01:00\"",
            "date = '2025-03-18T09:00:00'",
            "date = '2025-03-18 09:00:00'",
            "date = '2025-03-18'",
        ] {
            let post: Post = toml::from_str(doc).unwrap();
            assert_eq!(post.date, expected, "{}", doc);
        }
    }

    #[test]
    fn test_bad_quoted_date_is_rejected() {
        let err = toml::from_str::<Post>("date = 'last tuesday'").err().unwrap();
        assert!(err.message().contains("invalid date 'last tuesday'"));
    }

    #[test]
    fn test_time_only_is_rejected() {
        let res = toml::from_str::<Post>("date = 10:30:00");
        assert!(res.is_err());
    }

    #[test]
    fn test_display() {
        let date = TomlDate::from_str("2025-01-09").unwrap();
        assert_eq!(date.to_string(), "2025-01-09");
    }
}
