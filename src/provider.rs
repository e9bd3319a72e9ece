//! Provider subprocess invocation.
//!
//! Spawns `monthboard-provider-<name>` binaries and speaks the JSON
//! protocol from `monthboard_core::protocol` over stdin/stdout. Providers
//! manage their own credentials and tokens; this module only asks for
//! calendar metadata and events, and converts timed boundaries out of UTC
//! into civil local time before anything reaches the layout engine.

use std::time::Duration;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, Utc};
use monthboard_core::calendar::CalendarInfo;
use monthboard_core::error::{MonthboardError, MonthboardResult};
use monthboard_core::event::{Event, EventTime};
use monthboard_core::month::Month;
use monthboard_core::protocol::{
    Command, ListEventsParams, Request, Response, WireEvent, WireTime,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::warn;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Days of padding around the focused month when fetching, enough to
/// cover the grid's leading and trailing cells.
const FETCH_PADDING_DAYS: u64 = 7;

#[derive(Clone, Debug)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    fn binary_path(&self) -> MonthboardResult<std::path::PathBuf> {
        let binary_name = format!("monthboard-provider-{}", self.0);
        which::which(&binary_name).map_err(|_| {
            MonthboardError::ProviderNotInstalled(format!(
                "Provider '{}' not found. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })
    }

    pub async fn list_calendars(&self) -> MonthboardResult<Vec<CalendarInfo>> {
        self.call(Command::ListCalendars, serde_json::json!({}))
            .await
    }

    /// Fetch events overlapping `month`'s grid, already localized.
    pub async fn list_events(
        &self,
        calendar_ids: &[String],
        month: Month,
    ) -> MonthboardResult<Vec<Event>> {
        let (from, to) = fetch_window(month);
        let params = ListEventsParams {
            calendar_ids: calendar_ids.to_vec(),
            from,
            to,
        };

        let wire: Vec<WireEvent> = self.call(Command::ListEvents, params).await?;
        Ok(wire.into_iter().filter_map(localize).collect())
    }

    /// Call a provider command and return the result.
    async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> MonthboardResult<R> {
        timeout(PROVIDER_TIMEOUT, self.call_raw(command, params))
            .await
            .map_err(|_| MonthboardError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }

    /// Low-level call that sends a command with params and deserializes
    /// the response.
    async fn call_raw<P: Serialize, R: DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> MonthboardResult<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| MonthboardError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| MonthboardError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                MonthboardError::Provider(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(MonthboardError::Provider(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.is_empty() {
            return Err(MonthboardError::Provider(
                "Provider returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| MonthboardError::Provider(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(MonthboardError::Provider(error)),
        }
    }
}

/// The fetch window for a month: its grid range padded by a week on each
/// side.
pub fn fetch_window(month: Month) -> (NaiveDate, NaiveDate) {
    (
        month.first_day() - Days::new(FETCH_PADDING_DAYS),
        month.last_day() + Days::new(FETCH_PADDING_DAYS),
    )
}

/// Convert a wire event to core form, turning UTC instants into civil
/// local datetimes.
///
/// Events with mismatched boundary kinds or an empty all-day range are
/// dropped here with a warning; the layout engine never repairs
/// malformed input.
fn localize(wire: WireEvent) -> Option<Event> {
    let (start, end) = match (wire.start, wire.end) {
        (WireTime::Date(start), WireTime::Date(end)) => {
            if end <= start {
                warn!(id = %wire.id, "dropping all-day event with empty date range");
                return None;
            }
            (EventTime::Date(start), EventTime::Date(end))
        }
        (WireTime::DateTime(start), WireTime::DateTime(end)) => (
            EventTime::DateTime(to_local(start)),
            EventTime::DateTime(to_local(end)),
        ),
        _ => {
            warn!(id = %wire.id, "dropping event with mismatched start/end kinds");
            return None;
        }
    };

    Some(Event {
        id: wire.id,
        title: wire.title,
        description: wire.description,
        calendar_id: wire.calendar_id,
        start,
        end,
        color: wire.color,
    })
}

fn to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}
