//! Register View
//!
//! Account creation form. A successful registration lands on the login view;
//! failures map to one generic message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let name = name.get();
        let email = email.get();
        let password = password.get();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::register(&name, &email, &password).await {
                Ok(()) => navigate("/login", Default::default()),
                Err(_) => set_error.set(Some("Erro ao registrar. O e-mail já pode estar em uso.")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Crie sua Conta"</h1>

                <a class="oauth-btn" href=api::oauth_authorize_url()>
                    "Cadastrar com Google"
                </a>

                <div class="auth-divider">
                    <hr/>
                    <span>"OU"</span>
                    <hr/>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Nome"</label>
                    <input
                        id="name"
                        type="text"
                        required
                        placeholder="Seu nome"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

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
                            placeholder="Crie uma senha"
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

                    <button type="submit">"Registrar"</button>
                </form>

                <p class="auth-footer">
                    "Já tem uma conta? "
                    <A href="/login">"Faça login"</A>
                </p>
            </div>
        </div>
    }
}
