//! Auth Endpoints
//!
//! Login and registration. OAuth2 runs entirely on the API host; the client
//! only builds the authorization URL and later consumes the redirect token.

use serde::{Deserialize, Serialize};

use super::{http, ok_status, parse_json, url, API_BASE};

// ========================
// Payloads
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

// ========================
// Calls
// ========================

/// `POST /auth/login`, returns the bearer token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    let response = http()
        .post(url("/auth/login"))
        .json(&LoginArgs { email, password })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: TokenResponse = parse_json(response).await?;
    Ok(body.token)
}

/// `POST /auth/register`
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    let response = http()
        .post(url("/auth/register"))
        .json(&RegisterArgs {
            name,
            email,
            password,
        })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ok_status(response).map(|_| ())
}

/// URL the browser navigates to for the Google OAuth2 flow
pub fn oauth_authorize_url() -> String {
    format!("{}/oauth2/authorization/google", API_BASE)
}
