use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScheduleDocument {
    pub customer: Customer,
    pub calendar: Vec<MonthGroup>,
}

// Only the street is shown; the remaining fields ride along for `raw`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Customer {
    pub street: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    pub fn new(street: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonthGroup {
    pub year: i32,
    pub month: i32,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: ActionStatus,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub arrival_start_window: Option<String>,
    #[serde(default)]
    pub arrival_end_window: Option<String>,
    #[serde(default)]
    pub vendor: Option<Vendor>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStatus {
    Completed,
    Scheduled,
    Unscheduled,
    #[default]
    #[serde(other)]
    Unknown,
}

// Null, numbers and unrecognised names all land on `Unknown`.
fn status_or_unknown<'de, D>(deserializer: D) -> Result<ActionStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let status = match Value::deserialize(deserializer)? {
        Value::String(name) => match name.as_str() {
            "Completed" => ActionStatus::Completed,
            "Scheduled" => ActionStatus::Scheduled,
            "Unscheduled" => ActionStatus::Unscheduled,
            _ => ActionStatus::Unknown,
        },
        _ => ActionStatus::Unknown,
    };
    Ok(status)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub vendor_name: String,
    pub phone_number: String,
}

impl Action {
    /// Calendar day of `scheduled_date` as seen in `tz`.
    ///
    /// Timestamps with an offset are shifted into `tz` first. Timestamps
    /// without one are already local to `tz`, and bare `YYYY-MM-DD` dates
    /// are taken as written. Returns `None` when the field is missing or
    /// cannot be parsed.
    pub fn scheduled_day(&self, tz: &Tz) -> Option<NaiveDate> {
        let raw = self.scheduled_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(tz).date_naive());
        }
        if let Some(local) = LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        {
            return Some(local.date());
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(day) => Some(day),
            Err(e) => {
                tracing::warn!(
                    action_id = %self.id,
                    scheduled_date = raw,
                    "Ignoring unparseable scheduled date: {}",
                    e
                );
                None
            }
        }
    }
}
