//! Core types for agenda.
//!
//! - `event`: the `Event` type and date/time validation
//! - `store`: `EventStore`, the in-memory agenda mirrored to a JSON file
//! - `agenda_config`: global configuration (where the JSON file lives)

pub mod agenda_config;
pub mod error;
pub mod event;
pub mod store;

pub use agenda_config::AgendaConfig;
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, Field};
pub use store::EventStore;
