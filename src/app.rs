//! Orbit Frontend App
//!
//! Root component: restores the session, provides the session store, and
//! wires the router. Project and note views sit behind the session guard.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AppLayout, RequireSession};
use crate::pages::{
    Home, Login, NoteEditor, OAuth2RedirectHandler, ProjectDetails, Projects, Register,
};
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    // Restore synchronously so the guard sees the session on first render
    let store = Store::new(session::restore());
    provide_context(store);

    view! {
        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/login") view=Login/>
                    <Route path=path!("/register") view=Register/>
                    <Route path=path!("/oauth2/redirect") view=OAuth2RedirectHandler/>
                    <Route
                        path=path!("/projects")
                        view=|| view! { <RequireSession><Projects/></RequireSession> }
                    />
                    <Route
                        path=path!("/projects/:id")
                        view=|| view! { <RequireSession><ProjectDetails/></RequireSession> }
                    />
                    <Route
                        path=path!("/projects/:id/notes/:note_id")
                        view=|| view! { <RequireSession><NoteEditor/></RequireSession> }
                    />
                </Routes>
            </AppLayout>
        </Router>
    }
}
