use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::normalize::{clean_phone_number, clean_zipcode};
use crate::utils::error::{EtlError, Result};

/// Format of the `regdate` column, e.g. `11/12/08 10:47`.
pub const REGISTRATION_FORMAT: &str = "%m/%d/%y %H:%M";

/// One roster row as read from the attendee file. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub raw_zipcode: String,
    pub raw_home_phone: String,
    pub registration_timestamp: String,
}

/// Cleaned contact fields derived from an [`AttendeeRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContact {
    pub zipcode: String,
    pub phone: String,
}

impl NormalizedContact {
    pub fn from_record(record: &AttendeeRecord) -> Self {
        Self {
            zipcode: clean_zipcode(&record.raw_zipcode),
            phone: clean_phone_number(&record.raw_home_phone),
        }
    }
}

/// Hour of day and weekday (0 = Sunday) of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationMoment {
    pub hour: u32,
    pub weekday: u32,
    pub registered_at: NaiveDateTime,
}

impl RegistrationMoment {
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = NaiveDateTime::parse_from_str(value.trim(), REGISTRATION_FORMAT).map_err(
            |source| EtlError::TimestampError {
                value: value.to_string(),
                source,
            },
        )?;

        // `%y` 69 means 1969; chrono alone would give 2069
        let registered_at = if parsed.year() == 2069 {
            parsed.with_year(1969).unwrap_or(parsed)
        } else {
            parsed
        };

        Ok(Self {
            hour: registered_at.hour(),
            weekday: registered_at.weekday().num_days_from_sunday(),
            registered_at,
        })
    }
}

/// A representative entry from the civic information service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Result of a representative lookup: either the officials or the fallback text.
///
/// Serializes untagged so templates see a list or a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Officials {
    Found(Vec<Official>),
    Fallback(String),
}

impl Officials {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Officials::Fallback(_))
    }
}

/// Variables handed to the letter template for one attendee.
#[derive(Debug, Clone, Serialize)]
pub struct LetterContext<'a> {
    pub id: &'a str,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
    pub zipcode: &'a str,
    pub phone: &'a str,
    pub registration_date: NaiveDateTime,
    pub officials: &'a Officials,
}

impl<'a> LetterContext<'a> {
    pub fn new(
        record: &'a AttendeeRecord,
        contact: &'a NormalizedContact,
        moment: &RegistrationMoment,
        officials: &'a Officials,
    ) -> Self {
        Self {
            id: &record.id,
            first_name: &record.first_name,
            last_name: record.last_name.as_deref(),
            zipcode: &contact.zipcode,
            phone: &contact.phone,
            registration_date: moment.registered_at,
            officials,
        }
    }
}
