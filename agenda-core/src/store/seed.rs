//! Example events for a brand-new agenda.

use chrono::{Days, NaiveDate};

use crate::event::{Event, format_date};

/// (days from today, time, description)
const EXAMPLES: [(u64, &str, &str); 3] = [
    (0, "09:00", "Example: Review homework"),
    (1, "14:30", "Example: Group meeting"),
    (2, "17:00", "Example: Hand in assignment"),
];

/// The events written when no backing file exists yet.
pub fn example_events(today: NaiveDate) -> Vec<Event> {
    EXAMPLES
        .iter()
        .filter_map(|(offset, time, description)| {
            let date = today.checked_add_days(Days::new(*offset))?;
            Event::new(&format_date(date), time, description).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_span_three_days() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let events = example_events(today);

        let summary: Vec<_> = events.iter().map(|e| (e.date(), e.time())).collect();
        assert_eq!(
            summary,
            vec![
                ("2025-12-31", "09:00"),
                ("2026-01-01", "14:30"),
                ("2026-01-02", "17:00"),
            ]
        );
    }
}
