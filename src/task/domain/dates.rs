//! Calendar date parsing and the serde helpers for date-only wire fields.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate};

/// Wire and form format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and, for values the service stores as timestamps,
/// an RFC 3339 timestamp reduced to the calendar date in its own offset.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDate`] when the text is neither form.
pub fn parse_calendar_date(text: &str) -> Result<NaiveDate, TaskDomainError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|stamp| stamp.date_naive()))
        .map_err(|_| TaskDomainError::InvalidDate(text.to_owned()))
}

/// Serde adapter for `Option<NaiveDate>` fields; blank strings read as `None`.
pub(crate) mod calendar_date {
    use super::{DATE_FORMAT, parse_calendar_date};
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_calendar_date(text).map(Some).map_err(D::Error::custom),
        }
    }
}

/// Keeps an explicit `null` distinct from an absent field.
pub(crate) mod nullable {
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Tri-state calendar date: absent, `null` or a date.
pub(crate) mod nullable_calendar_date {
    use super::calendar_date;
    use chrono::NaiveDate;
    use serde::{Deserializer, Serializer};

    pub(crate) fn serialize<S>(
        value: &Option<Option<NaiveDate>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => calendar_date::serialize(inner, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        calendar_date::deserialize(deserializer).map(Some)
    }
}
