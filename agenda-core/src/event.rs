//! The agenda event type and its field validation.
//!
//! An event has no identity besides its (date, time, description) triple.
//! Date and time are kept in their canonical text form, which makes the
//! display order a plain string comparison.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Time pre-filled for new events when none is given.
pub const DEFAULT_TIME: &str = "12:00";

/// The fields of an event, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Description => "description",
        };
        write!(f, "{}", name)
    }
}

/// A scheduled item.
///
/// Only constructible through [`Event::new`] (or deserialization, which goes
/// through the same checks), so every value holds a canonical date and time
/// and a non-empty description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    #[serde(rename = "fecha")]
    date: String,
    #[serde(rename = "hora")]
    time: String,
    #[serde(rename = "descripcion")]
    description: String,
}

/// On-disk shape of an event, before validation.
#[derive(Deserialize)]
struct EventRecord {
    fecha: String,
    hora: String,
    descripcion: String,
}

impl TryFrom<EventRecord> for Event {
    type Error = AgendaError;

    fn try_from(record: EventRecord) -> AgendaResult<Self> {
        Event::new(&record.fecha, &record.hora, &record.descripcion)
    }
}

impl Event {
    /// Build an event from raw user input.
    ///
    /// Values are trimmed. Checks run in order: every field present, then the
    /// date, then the time.
    pub fn new(date: &str, time: &str, description: &str) -> AgendaResult<Self> {
        let date = date.trim();
        let time = time.trim();
        let description = description.trim();

        for (field, value) in [
            (Field::Date, date),
            (Field::Time, time),
            (Field::Description, description),
        ] {
            if value.is_empty() {
                return Err(AgendaError::MissingField(field));
            }
        }

        parse_date(date)?;
        parse_time(time)?;

        Ok(Event {
            date: date.to_string(),
            time: time.to_string(),
            description: description.to_string(),
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The calendar day of this event.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Whether this event is the one identified by the given triple.
    pub fn matches(&self, date: &str, time: &str, description: &str) -> bool {
        self.date == date && self.time == time && self.description == description
    }

    /// Key for display ordering.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} - {}", self.date, self.time, self.description)
    }
}

/// Parse a canonical `YYYY-MM-DD` date.
///
/// Anything chrono accepts but would format differently (`2025-1-5`,
/// `+2025-01-05`) is rejected, as is any year outside 0001-9999 (`-2025`,
/// `0000`), so stored dates always compare chronologically as text.
pub fn parse_date(value: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| (1..=9999).contains(&date.year()))
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
        .ok_or_else(|| AgendaError::InvalidDate(value.to_string()))
}

/// Parse a canonical 24-hour `HH:MM` time.
pub fn parse_time(value: &str) -> AgendaResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == value)
        .ok_or_else(|| AgendaError::InvalidTime(value.to_string()))
}

/// Format a date the way events store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
