use agenda_core::{Event, EventStore};
use anyhow::Result;
use dialoguer::{Confirm, Select};
use owo_colors::OwoColorize;

use super::list;

pub fn run(store: &mut EventStore, number: Option<usize>, yes: bool) -> Result<()> {
    let rows = store.list_sorted();

    if rows.is_empty() {
        println!("{}", "No events to remove".dimmed());
        return Ok(());
    }

    let selected = match number {
        Some(n) => row(&rows, n)?,
        None => {
            let items: Vec<String> = rows.iter().map(|e| e.to_string()).collect();
            let index = Select::new()
                .with_prompt("  Remove which event?")
                .items(&items)
                .default(0)
                .interact()?;
            rows[index].clone()
        }
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {}?", selected))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    if store.remove(selected.date(), selected.time(), selected.description()) {
        println!("{}", format!("  Removed: {}", selected).red());
        println!();
    }

    list::run(store)
}

/// The event shown as row `number` (1-based) of the sorted agenda.
fn row(rows: &[&Event], number: usize) -> Result<Event> {
    number
        .checked_sub(1)
        .and_then(|i| rows.get(i))
        .map(|event| (*event).clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No event #{}. Run `agenda list` to see event numbers (1-{}).",
                number,
                rows.len()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn store_with(path: &Path, events: &[(&str, &str, &str)]) -> EventStore {
        std::fs::write(path, "[]").unwrap();
        let mut store = EventStore::load(path);
        for (date, time, description) in events {
            store.add(date, time, description).unwrap();
        }
        store
    }

    #[test]
    fn row_numbers_follow_display_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(
            &dir.path().join("agenda_events.json"),
            &[("2025-03-21", "09:00", "Later"), ("2025-03-20", "09:00", "Sooner")],
        );
        let rows = store.list_sorted();

        assert_eq!(row(&rows, 1).unwrap().description(), "Sooner");
        assert_eq!(row(&rows, 2).unwrap().description(), "Later");
    }

    #[test]
    fn out_of_range_rows_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(
            &dir.path().join("agenda_events.json"),
            &[("2025-03-20", "09:00", "Only")],
        );
        let rows = store.list_sorted();

        assert!(row(&rows, 0).is_err());
        assert!(row(&rows, 2).is_err());
    }

    #[test]
    fn remove_by_number_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(
            &dir.path().join("agenda_events.json"),
            &[
                ("2025-03-21", "09:00", "Keep"),
                ("2025-03-20", "09:00", "Drop"),
                ("2025-03-20", "09:00", "Drop"),
            ],
        );

        run(&mut store, Some(1), true).unwrap();

        let left: Vec<_> = store.events().iter().map(|e| e.description()).collect();
        assert_eq!(left, vec!["Keep", "Drop"]);
    }
}
