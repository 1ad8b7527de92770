//! The event store.
//!
//! Holds the events in insertion order and mirrors them to a JSON backing
//! file. Every mutation rewrites the whole file before returning. Load and
//! save failures never escape the store: a bad file loads as an empty
//! agenda, a failed write is logged and the in-memory events stay as they
//! are.

mod file;
mod seed;

use file::{read_events, write_events};
use seed::example_events;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::error::AgendaResult;
use crate::event::Event;

pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Load the store from `path`, seeding example events relative to today
    /// if the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        Self::load_at(path, Local::now().date_naive())
    }

    /// Like [`EventStore::load`], with an explicit reference date for seeding.
    pub fn load_at(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "No backing file, seeding example events");
            let store = EventStore {
                events: example_events(today),
                path,
            };
            store.persist();
            return store;
        }

        let events = match read_events(&path) {
            Ok(events) => {
                debug!(path = %path.display(), count = events.len(), "Loaded events");
                events
            }
            Err(e) => {
                warn!("{e}. Starting with an empty agenda");
                Vec::new()
            }
        };

        EventStore { path, events }
    }

    /// Validate and append a new event, then persist.
    pub fn add(&mut self, date: &str, time: &str, description: &str) -> AgendaResult<Event> {
        let event = Event::new(date, time, description)?;
        self.events.push(event.clone());
        self.persist();
        Ok(event)
    }

    /// Remove the first stored event matching the triple, then persist.
    ///
    /// Returns whether an event was removed. No match leaves the store and
    /// the backing file untouched.
    pub fn remove(&mut self, date: &str, time: &str, description: &str) -> bool {
        let Some(index) = self
            .events
            .iter()
            .position(|e| e.matches(date, time, description))
        else {
            debug!(date, time, description, "No event to remove");
            return false;
        };

        self.events.remove(index);
        self.persist();
        true
    }

    /// All events ordered by (date, time); ties keep insertion order.
    pub fn list_sorted(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        sorted
    }

    /// Write all events to the backing file.
    ///
    /// Returns false if the write failed. The failure is logged and the
    /// in-memory events are kept.
    pub fn persist(&self) -> bool {
        match write_events(&self.path, &self.events) {
            Ok(()) => {
                debug!(path = %self.path.display(), count = self.events.len(), "Saved events");
                true
            }
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
