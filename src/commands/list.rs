use agenda_core::EventStore;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_agenda};

pub fn run(store: &EventStore) -> Result<()> {
    let events = store.list_sorted();

    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    for line in render_agenda(&events, Local::now().date_naive()) {
        println!("{}", line);
    }

    let footer = format!("{} {}", events.len(), pluralize("event", events.len()));
    println!("\n{}", footer.dimmed());

    Ok(())
}
