//! Frontend Models
//!
//! Data structures matching the REST API entities.

use serde::{Deserialize, Serialize};

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Note data structure (matches backend)
///
/// `number` is the project-scoped sequence number, `content` the serialized
/// document the editor reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub number: u32,
    pub content: String,
}

/// Project with its embedded notes, as returned by `GET /projects/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithNotes {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_with_notes_tolerates_missing_notes() {
        let parsed: ProjectWithNotes =
            serde_json::from_str(r#"{"id":1,"name":"Orbit","description":"app"}"#).unwrap();
        assert!(parsed.notes.is_empty());

        let parsed: ProjectWithNotes = serde_json::from_str(
            r#"{"id":1,"name":"Orbit","description":"app","notes":[{"id":9,"number":1,"content":""}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.notes.len(), 1);
        assert_eq!(parsed.notes[0].number, 1);
    }
}
