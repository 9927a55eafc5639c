//! Job listing model and the payloads sent back to the job board API.
//!
//! Jobs arrive from the server and are never mutated client-side. Drafts and
//! application forms are plain text until they cross the API boundary, where
//! [`JobDraft::to_payload`] and [`ApplyPayload::new`] coerce and trim them.

use crate::domain::error::{JobBoardError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Opaque job identifier, unique within one search result set.
///
/// The server emits integer ids, but nothing client-side depends on that, so
/// both JSON numbers and strings are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawJobId")]
pub struct JobId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawJobId {
    Number(i64),
    Text(String),
}

impl From<RawJobId> for JobId {
    fn from(raw: RawJobId) -> Self {
        match raw {
            RawJobId::Number(n) => Self(n.to_string()),
            RawJobId::Text(s) => Self(s),
        }
    }
}

impl JobId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A job listing as returned by `GET /api/jobs`.
///
/// # Fields
///
/// - `pay_amount`: non-negative amount, displayed without trailing `.0`
/// - `pay_type`: server-defined enumeration (`"fixed"`, `"hourly"`, ...)
/// - `created_at`: RFC 3339 timestamp or plain `YYYY-MM-DD` date, if sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub city: String,
    pub category: String,
    pub pay_amount: f64,
    #[serde(default)]
    pub pay_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Job {
    /// Returns a short "how long ago" label for `created_at`.
    ///
    /// - Less than 1 minute (or in the future): "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Values that do not parse as a timestamp or a date are returned verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use jobboard::domain::{Job, JobId};
    ///
    /// let job = Job {
    ///     id: JobId::new("1"),
    ///     title: "Move a couch".to_string(),
    ///     city: "Portland, OR".to_string(),
    ///     category: "Moving help".to_string(),
    ///     pay_amount: 60.0,
    ///     pay_type: "fixed".to_string(),
    ///     description: None,
    ///     created_at: Some("2026-01-01".to_string()),
    /// };
    /// let now = Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap();
    /// assert_eq!(job.posted_ago(now).as_deref(), Some("2d ago"));
    /// ```
    #[must_use]
    pub fn posted_ago(&self, now: DateTime<Utc>) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let Some(created) = parse_timestamp(raw) else {
            return Some(raw.to_string());
        };

        let diff = (now - created).num_seconds();
        let label = if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        };
        Some(label)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Fields of the "post a job" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Title,
    City,
    Category,
    PayType,
    PayAmount,
    DurationHours,
    Description,
}

impl DraftField {
    /// Resolves a form input name (`"pay_amount"`, `"title"`, ...) to a field.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "city" => Some(Self::City),
            "category" => Some(Self::Category),
            "pay_type" => Some(Self::PayType),
            "pay_amount" => Some(Self::PayAmount),
            "duration_hours" => Some(Self::DurationHours),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Unsent user input for a new job, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub city: String,
    pub category: String,
    pub pay_type: String,
    pub pay_amount: String,
    pub duration_hours: String,
    pub description: String,
}

impl JobDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::City => &mut self.city,
            DraftField::Category => &mut self.category,
            DraftField::PayType => &mut self.pay_type,
            DraftField::PayAmount => &mut self.pay_amount,
            DraftField::DurationHours => &mut self.duration_hours,
            DraftField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Coerces the draft into the `POST /api/jobs` body.
    ///
    /// `pay_amount` is required and must be a finite, non-negative number.
    /// `duration_hours` becomes `null` when blank. Integral input stays an
    /// integer on the wire (`"1500"` serializes as `1500`).
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::InvalidDraft`] if a numeric field does not coerce.
    pub fn to_payload(&self) -> Result<NewJobPayload> {
        if self.pay_amount.trim().is_empty() {
            return Err(JobBoardError::InvalidDraft {
                field: "pay_amount",
                reason: "a pay amount is required".to_string(),
            });
        }
        let pay_amount = coerce_amount("pay_amount", &self.pay_amount)?;

        let duration_hours = if self.duration_hours.trim().is_empty() {
            None
        } else {
            Some(coerce_amount("duration_hours", &self.duration_hours)?)
        };

        Ok(NewJobPayload {
            title: self.title.clone(),
            city: self.city.clone(),
            category: self.category.clone(),
            pay_type: self.pay_type.clone(),
            pay_amount,
            duration_hours,
            description: self.description.clone(),
        })
    }
}

fn coerce_amount(field: &'static str, raw: &str) -> Result<serde_json::Number> {
    let trimmed = raw.trim();

    if let Ok(whole) = trimmed.parse::<u64>() {
        return Ok(whole.into());
    }

    let value: f64 = trimmed.parse().map_err(|_| JobBoardError::InvalidDraft {
        field,
        reason: format!("`{trimmed}` is not a number"),
    })?;

    if value < 0.0 {
        return Err(JobBoardError::InvalidDraft {
            field,
            reason: format!("`{trimmed}` is negative"),
        });
    }

    // `-0` parses as negative zero; send plain zero
    serde_json::Number::from_f64(value + 0.0).ok_or_else(|| JobBoardError::InvalidDraft {
        field,
        reason: format!("`{trimmed}` is not finite"),
    })
}

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobPayload {
    pub title: String,
    pub city: String,
    pub category: String,
    pub pay_type: String,
    pub pay_amount: serde_json::Number,
    pub duration_hours: Option<serde_json::Number>,
    pub description: String,
}

/// Body of `POST /api/jobs/{id}/apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyPayload {
    pub name: String,
    pub phone_or_email: String,
    pub message: String,
}

impl ApplyPayload {
    /// Builds an application body, trimming every field.
    ///
    /// ```
    /// use jobboard::domain::ApplyPayload;
    ///
    /// let payload = ApplyPayload::new("Ann", " ann@x.com ", "");
    /// assert_eq!(payload.phone_or_email, "ann@x.com");
    /// ```
    #[must_use]
    pub fn new(name: &str, phone_or_email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone_or_email: phone_or_email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}
