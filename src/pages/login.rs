//! Login View
//!
//! Email/password form plus the Google OAuth2 entry point. Any failure maps
//! to one generic invalid-credentials message; no retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::{self, use_session};

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let email = email.get();
        let password = password.get();
        let navigate = navigate.clone();

        spawn_local(async move {
            match session::login(session, &email, &password).await {
                Ok(()) => navigate("/projects", Default::default()),
                Err(_) => set_error.set(Some("Falha no login. Verifique seu e-mail e senha.")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login no Orbit"</h1>

                <a class="oauth-btn" href=api::oauth_authorize_url()>
                    "Entrar com Google"
                </a>

                <div class="auth-divider">
                    <hr/>
                    <span>"OU"</span>
                    <hr/>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        placeholder="Seu e-mail"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Senha"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            required
                            placeholder="Sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="toggle-password-btn"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <button type="submit">"Entrar"</button>
                </form>

                <p class="auth-footer">
                    "Não tem uma conta? "
                    <A href="/register">"Registre-se"</A>
                </p>
            </div>
        </div>
    }
}
