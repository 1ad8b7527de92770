//! Terminal rendering for agenda events.
//!
//! Extension traits and helpers that turn agenda-core types into colored
//! terminal output using owo_colors.

use agenda_core::Event;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{} {}", self.time().cyan(), self.description())
    }
}

/// Render the sorted agenda grouped by day.
///
/// Rows are numbered from 1 in display order; `agenda remove` takes the
/// same numbers.
pub fn render_agenda(events: &[&Event], today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_date: Option<&str> = None;

    for (i, event) in events.iter().enumerate() {
        if current_date != Some(event.date()) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(date_label(event, today).bold().to_string());
            current_date = Some(event.date());
        }

        let number = format!("{:>3}.", i + 1);
        lines.push(format!("  {} {}", number.dimmed(), event.render()));
    }

    lines
}

/// A human-readable day label (e.g. "Today", "Tomorrow", "Wed Feb 25").
pub fn date_label(event: &Event, today: NaiveDate) -> String {
    let Some(date) = event.day() else {
        return event.date().to_string();
    };

    match (date - today).num_days() {
        0 => format!("Today ({})", event.date()),
        1 => format!("Tomorrow ({})", event.date()),
        -1 => format!("Yesterday ({})", event.date()),
        _ if date.year() == today.year() => date.format("%a %b %-d").to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn event(date: &str, time: &str, description: &str) -> Event {
        Event::new(date, time, description).unwrap()
    }

    #[test]
    fn relative_labels() {
        assert_eq!(date_label(&event("2025-03-20", "09:00", "A"), today()), "Today (2025-03-20)");
        assert_eq!(
            date_label(&event("2025-03-21", "09:00", "A"), today()),
            "Tomorrow (2025-03-21)"
        );
        assert_eq!(
            date_label(&event("2025-03-19", "09:00", "A"), today()),
            "Yesterday (2025-03-19)"
        );
    }

    #[test]
    fn absolute_labels() {
        assert_eq!(date_label(&event("2025-03-26", "09:00", "A"), today()), "Wed Mar 26");
        assert_eq!(date_label(&event("2026-01-05", "09:00", "A"), today()), "Mon Jan 5 2026");
    }

    #[test]
    fn agenda_groups_by_day_and_numbers_rows() {
        let a = event("2025-03-20", "09:00", "Standup");
        let b = event("2025-03-20", "14:30", "Review");
        let c = event("2025-03-22", "17:00", "Deadline");

        let lines = render_agenda(&[&a, &b, &c], today());

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Today"));
        assert!(lines[1].contains("1.") && lines[1].contains("Standup"));
        assert!(lines[2].contains("2.") && lines[2].contains("Review"));
        assert!(lines[3].is_empty());
        assert!(lines[4].contains("Sat Mar 22"));
        assert!(lines[5].contains("3.") && lines[5].contains("Deadline"));
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("event", 3), "events");
    }
}
