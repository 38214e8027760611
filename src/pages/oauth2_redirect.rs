//! OAuth2 Redirect Handler
//!
//! The API host finishes the Google flow by redirecting back here with a
//! `token` query parameter. Adopting it goes through the same decode/persist
//! path as a password login; anything else falls back to the login view.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::{self, use_session};

#[component]
pub fn OAuth2RedirectHandler() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let token = query.with(|q| q.get("token"));
        let destination = match token {
            Some(token) if session::login_with_token(session, token.clone()).is_ok() => "/projects",
            _ => "/login",
        };
        navigate(destination, Default::default());
    });

    view! {
        <div class="oauth-redirect">
            <p>"Autenticando..."</p>
        </div>
    }
}
