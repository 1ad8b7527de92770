use agenda_core::event::{DEFAULT_TIME, format_date};
use agenda_core::{AgendaError, Event, EventStore};
use anyhow::Result;
use chrono::Local;
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::list;

pub fn run(
    store: &mut EventStore,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| format_date(Local::now().date_naive()));
    let time = time.unwrap_or_else(|| DEFAULT_TIME.to_string());

    let added = match description {
        Some(description) => store.add(&date, &time, &description)?,
        None => prompt_until_added(store, date, time)?,
    };

    println!("{}", format!("  Added: {}", added).green());
    println!();

    list::run(store)
}

/// Prompt for all three fields, re-prompting with the last answers until
/// the store accepts them.
fn prompt_until_added(store: &mut EventStore, mut date: String, mut time: String) -> Result<Event> {
    let mut description = String::new();

    loop {
        date = Input::new()
            .with_prompt("  Date (YYYY-MM-DD)")
            .default(date)
            .interact_text()?;
        time = Input::new()
            .with_prompt("  Time (HH:MM)")
            .default(time)
            .interact_text()?;
        description = Input::new()
            .with_prompt("  Description")
            .with_initial_text(description)
            .allow_empty(true)
            .interact_text()?;

        match store.add(&date, &time, &description) {
            Ok(event) => return Ok(event),
            Err(e) => eprintln!("  {}", validation_message(&e)?.red()),
        }
    }
}

/// The message shown for a rejected event; other errors are passed through.
fn validation_message(error: &AgendaError) -> Result<String> {
    match error {
        AgendaError::MissingField(_) => Ok("Fill in date, time and description.".to_string()),
        AgendaError::InvalidDate(_) => Ok("Invalid date. Use YYYY-MM-DD.".to_string()),
        AgendaError::InvalidTime(_) => Ok("Invalid time. Use HH:MM (24h).".to_string()),
        other => anyhow::bail!("{}", other),
    }
}
