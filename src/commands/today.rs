//! List today's events.

use anyhow::Result;
use monthboard_core::layout::membership;
use monthboard_core::month::Month;
use monthboard_core::view::MonthView;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::config::Config;
use crate::provider::Provider;

pub async fn run(config: &Config) -> Result<()> {
    let provider = Provider::from_name(&config.provider);
    let today = chrono::Local::now().date_naive();

    let calendars = super::calendars_or_empty(&provider).await?;
    let ids = super::selected(config, &[], &calendars);

    let mut view = MonthView::new();
    view.set_calendars(calendars);

    let events = match provider.list_events(&ids, Month::containing(today)).await {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, "event fetch failed");
            Vec::new()
        }
    };

    let day = membership::events_for_day(&events, today);
    if day.is_empty() {
        println!("{}", "No events today".dimmed());
        return Ok(());
    }

    for event in day {
        let calendar = view.calendar(&event.calendar_id);
        println!(
            "{} {} {}",
            format!("{:<22}", event.time_label(today)).dimmed(),
            event.display_title(),
            format!("({})", calendar.summary).dimmed()
        );
        if let Some(description) = &event.description {
            println!("{:<23}{}", "", description.dimmed());
        }
    }
    Ok(())
}
