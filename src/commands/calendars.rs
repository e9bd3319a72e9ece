//! List calendars available from the provider.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::provider::Provider;
use crate::render::Render;

pub async fn run(config: &Config) -> Result<()> {
    let provider = Provider::from_name(&config.provider);
    let calendars = provider.list_calendars().await?;

    if calendars.is_empty() {
        println!("{}", "No calendars".dimmed());
        return Ok(());
    }

    for calendar in &calendars {
        let shown = config.calendars.is_empty() || config.calendars.contains(&calendar.id);
        let marker = if shown { "*" } else { " " };
        println!("{} {}", marker, calendar.render());
    }
    Ok(())
}
