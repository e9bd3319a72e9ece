//! Calendar display metadata.

use serde::{Deserialize, Serialize};

/// Fallback event color when neither the event nor its calendar has one.
pub const DEFAULT_COLOR: &str = "#4285F4";

/// Display metadata for one source calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub id: String,
    /// Display name.
    pub summary: String,
    /// Background color for events without an explicit color.
    pub color: Option<String>,
}

impl CalendarInfo {
    /// Stand-in metadata for events whose calendar is not in the working set.
    pub fn unknown(id: &str) -> Self {
        CalendarInfo {
            id: id.to_string(),
            summary: "Unknown Calendar".to_string(),
            color: Some(DEFAULT_COLOR.to_string()),
        }
    }
}
