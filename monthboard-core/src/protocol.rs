//! Provider protocol types.
//!
//! Defines the JSON protocol used for communication between the
//! monthboard CLI and provider binaries over stdin/stdout.
//!
//! Providers manage their own credentials and tokens; the CLI only asks
//! for calendar metadata and events. Timed boundaries travel in UTC and
//! are converted to civil local time on the CLI side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Commands that providers must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ListCalendars,
    ListEvents,
}

/// Request sent from the CLI to a provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from a provider to the CLI.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Parameters for `list_events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsParams {
    pub calendar_ids: Vec<String>,
    /// Inclusive fetch window start.
    pub from: NaiveDate,
    /// Inclusive fetch window end.
    pub to: NaiveDate,
}

/// An event as providers emit it, before local-time conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub calendar_id: String,
    pub start: WireTime,
    /// Exclusive end date for all-day events.
    pub end: WireTime,
    #[serde(default)]
    pub color: Option<String>,
}

/// Start or end boundary on the wire: a civil date for all-day events,
/// a UTC instant for timed ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireTime {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trip() {
        let request = Request {
            command: Command::ListEvents,
            params: serde_json::json!({"calendar_ids": ["primary"]}),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"list_events\""));

        let parsed: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.command, Command::ListEvents);
    }

    #[test]
    fn test_error_response_shape() {
        let json = Response::error("auth expired");
        assert_eq!(json, r#"{"status":"error","error":"auth expired"}"#);
    }

    #[test]
    fn test_wire_event_all_day() {
        let json = r#"{
            "id": "e1",
            "title": "Trip",
            "calendar_id": "primary",
            "start": {"date": "2024-01-16"},
            "end": {"date": "2024-01-18"}
        }"#;
        let event: WireEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.start,
            WireTime::Date(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap())
        );
        assert!(event.color.is_none());
    }
}
