//! Home View

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Bem-vindo ao Orbit"</h1>
            <p>"Seu espaço para organizar projetos e ideias."</p>
        </div>
    }
}
