//! Redraw the board on a refresh interval.
//!
//! Each cycle refetches calendars and events and redraws the whole
//! board. A failed refresh keeps the previous event set and marks the
//! header stale instead of blanking the screen.

use std::time::Duration;

use anyhow::Result;
use monthboard_core::month::Month;
use monthboard_core::view::MonthView;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::provider::Provider;
use crate::render::render_month;

pub async fn run(config: &Config, pinned: Option<Month>, interval: Option<u64>) -> Result<()> {
    let secs = interval.unwrap_or(config.refresh_secs).max(1);
    let provider = Provider::from_name(&config.provider);

    let mut view = MonthView::new();
    if let Some(month) = pinned {
        view.set_focused_month(month);
    }

    info!(interval = secs, "auto-refresh enabled");

    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    let mut stale = false;

    loop {
        ticker.tick().await;

        // An unpinned board follows the current month across rollover
        if pinned.is_none() {
            view.go_to_today();
        }
        let month = view.focused_month();

        let calendars = super::calendars_or_empty(&provider).await?;
        let ids = super::selected(config, &[], &calendars);
        if !calendars.is_empty() {
            view.set_calendars(calendars);
        }

        match provider.list_events(&ids, month).await {
            Ok(events) => {
                debug!(events = events.len(), %month, "refreshed");
                view.set_events(events);
                stale = false;
            }
            Err(err) => {
                warn!(error = %err, "refresh failed; keeping the previous events");
                stale = true;
            }
        }

        // Full overwrite: clear and redraw the whole board
        print!("\x1b[2J\x1b[H");
        println!("{}", render_month(&view.render(), stale));
    }
}
