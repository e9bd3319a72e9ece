//! Render one month and exit.

use anyhow::Result;
use monthboard_core::month::Month;
use monthboard_core::view::MonthView;
use tracing::warn;

use crate::config::Config;
use crate::provider::Provider;
use crate::render::Render;

pub async fn run(config: &Config, month: Month, only: Vec<String>) -> Result<()> {
    let provider = Provider::from_name(&config.provider);

    let mut view = MonthView::new();
    view.set_focused_month(month);

    let calendars = super::calendars_or_empty(&provider).await?;
    let ids = super::selected(config, &only, &calendars);
    view.set_calendars(calendars);

    // A failed fetch renders as an empty month rather than crashing
    match provider.list_events(&ids, month).await {
        Ok(events) => view.set_events(events),
        Err(err) => warn!(error = %err, "event fetch failed; rendering an empty month"),
    }

    println!("{}", view.render().render());
    Ok(())
}
