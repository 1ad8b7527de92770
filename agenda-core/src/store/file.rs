//! Read and write the JSON backing file.

use std::path::Path;

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// Read every event from the backing file, in stored order.
///
/// Any unreadable file, malformed JSON or invalid record is a `Load` error;
/// the store decides how to recover.
pub fn read_events(path: &Path) -> AgendaResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AgendaError::Load(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| AgendaError::Load(format!("{}: {}", path.display(), e)))
}

/// Overwrite the backing file with the given events.
///
/// Output is pretty-printed UTF-8 with non-ASCII text kept as is.
pub fn write_events(path: &Path, events: &[Event]) -> AgendaResult<()> {
    let content = serde_json::to_string_pretty(events)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AgendaError::Persist(format!("Could not create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(path, content)
        .map_err(|e| AgendaError::Persist(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Event> {
        vec![
            Event::new("2025-03-21", "14:30", "Reunión de grupo").unwrap(),
            Event::new("2025-03-20", "09:00", "Standup").unwrap(),
        ]
    }

    #[test]
    fn write_then_read_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda_events.json");

        write_events(&path, &sample()).unwrap();
        assert_eq!(read_events(&path).unwrap(), sample());
    }

    #[test]
    fn written_file_is_indented_and_keeps_accents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda_events.json");

        write_events(&path, &sample()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("[\n  {\n    \"fecha\": \"2025-03-21\""));
        assert!(content.contains("\"descripcion\": \"Reunión de grupo\""));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/agenda_events.json");

        write_events(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn malformed_content_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda_events.json");

        for content in [
            "not json",
            "{\"fecha\": \"2025-03-20\"}",
            "[{\"fecha\": \"2025-13-01\", \"hora\": \"09:00\", \"descripcion\": \"x\"}]",
        ] {
            std::fs::write(&path, content).unwrap();
            assert!(matches!(read_events(&path), Err(AgendaError::Load(_))));
        }
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_events(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(AgendaError::Load(_))));
    }

    #[test]
    fn writing_into_a_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_events(dir.path(), &sample());
        assert!(matches!(result, Err(AgendaError::Persist(_))));
    }
}
