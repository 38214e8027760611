//! Route Guard
//!
//! Wraps a routed view that only renders with a session present; otherwise
//! the navigation is redirected to the login view. The check is synchronous
//! against the in-memory session: a stored-but-expired token passes here and
//! is only rejected by the server on the next call.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::{use_session, SessionStateStoreFields};

/// Guard for protected routes
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.token().get().is_some()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
