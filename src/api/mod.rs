//! REST API Bindings
//!
//! Frontend bindings to the Orbit backend, organized by domain. Every call is
//! a plain request/response round trip; failures of any kind collapse into a
//! `String` error the views map to one localized message. No retries.

mod auth;
mod note;
mod project;

use serde::de::DeserializeOwned;

// Re-export all public items
pub use auth::*;
pub use note::*;
pub use project::*;

/// Base URL of the API host
pub const API_BASE: &str = "http://localhost:8080";

pub(crate) fn http() -> reqwest::Client {
    reqwest::Client::new()
}

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Check the status and deserialize the body
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, String> {
    let response = ok_status(response)?;
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// Check the status of a call whose body is irrelevant
pub(crate) fn ok_status(response: reqwest::Response) -> Result<reqwest::Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(format!("HTTP {}", response.status()))
    }
}
