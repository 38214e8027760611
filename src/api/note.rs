//! Note Endpoints
//!
//! Frontend bindings for note CRUD. Content travels as the serialized
//! document string in both directions.

use serde::Serialize;

use super::{http, ok_status, parse_json, url};
use crate::models::Note;

// ========================
// Payloads
// ========================

#[derive(Serialize)]
pub struct NoteContentArgs<'a> {
    pub content: &'a str,
}

// ========================
// Calls
// ========================

/// `POST /notes/project/{projectId}`, creates an empty note
pub async fn create_note(token: &str, project_id: u64) -> Result<Note, String> {
    let response = http()
        .post(url(&format!("/notes/project/{}", project_id)))
        .bearer_auth(token)
        .json(&NoteContentArgs { content: "" })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `GET /notes/{id}`
pub async fn get_note(token: &str, id: u64) -> Result<Note, String> {
    let response = http()
        .get(url(&format!("/notes/{}", id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `PUT /notes/{id}`, persists the full current document
pub async fn update_note(token: &str, id: u64, content: &str) -> Result<Note, String> {
    let response = http()
        .put(url(&format!("/notes/{}", id)))
        .bearer_auth(token)
        .json(&NoteContentArgs { content })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `DELETE /notes/{id}`
pub async fn delete_note(token: &str, id: u64) -> Result<(), String> {
    let response = http()
        .delete(url(&format!("/notes/{}", id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ok_status(response).map(|_| ())
}
