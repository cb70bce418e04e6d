//! Lead data model
//!
//! `LeadInput` is what clients send, `LeadRecord` is one row of the lead log,
//! and `LeadStats` is the aggregate view over the whole log.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Reference value that marks a row as the initial registrant
pub const REGISTRANT_MARKER: &str = "CADASTRADOR";

/// Timestamp layout used in the lead log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Contact fields submitted for a registrant or a referred lead.
///
/// Missing fields deserialize as empty strings so they fail validation with a
/// field-specific message instead of a decode error. The Portuguese field
/// names used by the legacy frontend are accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInput {
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "telefone")]
    pub phone: String,
}

impl LeadInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Copy of this input with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// One immutable row of the lead log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Registered_At", with = "timestamp_format")]
    pub registered_at: NaiveDateTime,
}

impl LeadRecord {
    pub fn new(lead: &LeadInput, reference: &str, registered_at: NaiveDateTime) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            reference: reference.to_string(),
            registered_at,
        }
    }

    /// Local wall-clock time truncated to whole seconds, matching the log format
    pub fn now_timestamp() -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    pub fn is_registrant(&self) -> bool {
        self.reference == REGISTRANT_MARKER
    }

    pub fn to_input(&self) -> LeadInput {
        LeadInput::new(&self.name, &self.email, &self.phone)
    }
}

/// Aggregate counts over the lead log
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStats {
    pub total_leads: u64,
    pub total_registrants: u64,
    pub referred_leads: u64,
}

impl LeadStats {
    pub fn from_records(records: &[LeadRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.count(record.is_registrant());
            stats
        })
    }

    /// Count one row of the log
    pub fn count(&mut self, is_registrant: bool) {
        self.total_leads += 1;
        if is_registrant {
            self.total_registrants += 1;
        } else {
            self.referred_leads += 1;
        }
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
