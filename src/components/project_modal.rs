//! Project Form Modal
//!
//! Create/edit dialog for projects. The parent hands in an explicit mode and
//! receives a typed result instead of a bag of callbacks: the modal performs
//! the API call itself and reports what actually happened.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProjectArgs};
use crate::models::Project;
use crate::session::{use_session, SessionStateStoreFields};

/// What the modal is being asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectModalMode {
    Create,
    Edit(Project),
}

/// Outcome reported back to the parent view
#[derive(Debug, Clone)]
pub enum ProjectModalResult {
    Created(Project),
    Updated(Project),
    Cancelled,
}

/// Modal form for creating or editing a project
#[component]
pub fn ProjectFormModal(
    mode: ProjectModalMode,
    #[prop(into)] on_close: Callback<ProjectModalResult>,
) -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(match &mode {
        ProjectModalMode::Create => String::new(),
        ProjectModalMode::Edit(p) => p.name.clone(),
    });
    let (description, set_description) = signal(match &mode {
        ProjectModalMode::Create => String::new(),
        ProjectModalMode::Edit(p) => p.description.clone(),
    });
    let (form_error, set_form_error) = signal(None::<&'static str>);
    let (submitting, set_submitting) = signal(false);

    let title = match &mode {
        ProjectModalMode::Create => "Novo Projeto",
        ProjectModalMode::Edit(_) => "Editar Projeto",
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let name_value = name.get();
        if name_value.trim().is_empty() {
            set_form_error.set(Some("O nome do projeto é obrigatório."));
            return;
        }
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        let description_value = description.get();
        let mode = mode.clone();
        set_form_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let args = ProjectArgs {
                name: &name_value,
                description: &description_value,
            };
            let result = match &mode {
                ProjectModalMode::Create => api::create_project(&token, &args)
                    .await
                    .map(ProjectModalResult::Created),
                ProjectModalMode::Edit(p) => api::update_project(&token, p.id, &args)
                    .await
                    .map(ProjectModalResult::Updated),
            };
            match result {
                Ok(outcome) => on_close.run(outcome),
                Err(_) => {
                    set_form_error.set(Some("Erro ao salvar o projeto."));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button
                        class="close-btn"
                        on:click=move |_| on_close.run(ProjectModalResult::Cancelled)
                    >
                        "×"
                    </button>
                </div>
                <form class="modal-form" on:submit=on_submit>
                    <label for="project-name">"Nome"</label>
                    <input
                        id="project-name"
                        type="text"
                        placeholder="Nome do projeto"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="project-description">"Descrição"</label>
                    <textarea
                        id="project-description"
                        placeholder="Descrição do projeto"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| on_close.run(ProjectModalResult::Cancelled)
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
