//! Subcommand implementations.

pub mod calendars;
pub mod show;
pub mod today;
pub mod watch;

use monthboard_core::calendar::CalendarInfo;
use monthboard_core::error::{MonthboardError, MonthboardResult};
use tracing::warn;

use crate::config::Config;
use crate::provider::Provider;

/// Fetch calendar metadata, degrading to an empty set on transient
/// failures. A missing provider binary is a setup problem and stays an
/// error.
pub(crate) async fn calendars_or_empty(
    provider: &Provider,
) -> MonthboardResult<Vec<CalendarInfo>> {
    match provider.list_calendars().await {
        Ok(calendars) => Ok(calendars),
        Err(err @ MonthboardError::ProviderNotInstalled(_)) => Err(err),
        Err(err) => {
            warn!(error = %err, "calendar fetch failed; continuing without metadata");
            Ok(Vec::new())
        }
    }
}

/// Resolve which calendar ids to display: an explicit CLI selection wins,
/// then the configured set, then everything the provider listed.
pub(crate) fn selected(config: &Config, only: &[String], listed: &[CalendarInfo]) -> Vec<String> {
    if !only.is_empty() {
        only.to_vec()
    } else if !config.calendars.is_empty() {
        config.calendars.clone()
    } else {
        listed.iter().map(|c| c.id.clone()).collect()
    }
}
