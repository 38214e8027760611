//! Project Endpoints
//!
//! Frontend bindings for project CRUD. All calls carry the bearer token.

use serde::Serialize;

use super::{http, ok_status, parse_json, url};
use crate::models::{Project, ProjectWithNotes};

// ========================
// Payloads
// ========================

#[derive(Serialize)]
pub struct ProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

// ========================
// Calls
// ========================

/// `GET /projects/user/{userId}`
pub async fn list_projects(token: &str, user_id: u64) -> Result<Vec<Project>, String> {
    let response = http()
        .get(url(&format!("/projects/user/{}", user_id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `POST /projects`
pub async fn create_project(token: &str, args: &ProjectArgs<'_>) -> Result<Project, String> {
    let response = http()
        .post(url("/projects"))
        .bearer_auth(token)
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `PUT /projects/{id}`
pub async fn update_project(
    token: &str,
    id: u64,
    args: &ProjectArgs<'_>,
) -> Result<Project, String> {
    let response = http()
        .put(url(&format!("/projects/{}", id)))
        .bearer_auth(token)
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// `DELETE /projects/{id}`
pub async fn delete_project(token: &str, id: u64) -> Result<(), String> {
    let response = http()
        .delete(url(&format!("/projects/{}", id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ok_status(response).map(|_| ())
}

/// `GET /projects/{id}`, project with embedded notes
pub async fn get_project(token: &str, id: u64) -> Result<ProjectWithNotes, String> {
    let response = http()
        .get(url(&format!("/projects/{}", id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}
