//! Application Layout
//!
//! Header navigation wrapping every routed view. Shows the signed-in account
//! with a logout action, or a login link.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::{self, use_session, SessionStateStoreFields};

/// Page chrome: nav header plus the routed content
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", Default::default());
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <nav class="app-nav">
                    <A href="/">"Início"</A>
                    <A href="/projects">"Projetos"</A>
                </nav>
                <div class="session-area">
                    {move || match session.user().get() {
                        Some(user) => view! {
                            <span class="session-email">{user.sub}</span>
                            <button class="logout-btn" on:click=on_logout.clone()>"Sair"</button>
                        }.into_any(),
                        None => view! {
                            <A href="/login">"Entrar"</A>
                        }.into_any(),
                    }}
                </div>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
