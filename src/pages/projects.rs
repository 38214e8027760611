//! Projects View
//!
//! Card grid of the session user's projects with create/edit via the modal
//! and inline delete. The local list mirrors server state after each
//! mutation: created projects are prepended, updates replace in place,
//! deletes retain the rest.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{
    DeleteConfirmButton, ProjectFormModal, ProjectModalMode, ProjectModalResult,
};
use crate::models::Project;
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn Projects() -> impl IntoView {
    let session = use_session();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<&'static str>);
    let (modal, set_modal) = signal(None::<ProjectModalMode>);

    // Load the user's projects on mount
    Effect::new(move |_| {
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        let Some(user) = session.user().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::list_projects(&token, user.id).await {
                Ok(list) => set_projects.set(list),
                Err(_) => set_error.set(Some("Erro ao carregar os projetos.")),
            }
            set_loading.set(false);
        });
    });

    let on_modal_close = Callback::new(move |result: ProjectModalResult| {
        match result {
            ProjectModalResult::Created(project) => {
                set_projects.update(|list| list.insert(0, project));
            }
            ProjectModalResult::Updated(project) => {
                set_projects.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|p| p.id == project.id) {
                        *slot = project;
                    }
                });
            }
            ProjectModalResult::Cancelled => {}
        }
        set_modal.set(None);
    });

    let on_delete = move |id: u64| {
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        spawn_local(async move {
            if api::delete_project(&token, id).await.is_ok() {
                set_projects.update(|list| list.retain(|p| p.id != id));
            }
        });
    };

    view! {
        <div class="projects-page">
            <div class="projects-header">
                <h1>"Lista de Projetos"</h1>
                <button
                    class="new-project-btn"
                    on:click=move |_| set_modal.set(Some(ProjectModalMode::Create))
                >
                    "Novo projeto"
                </button>
            </div>

            {move || loading.get().then(|| view! { <p class="loading">"Carregando projetos..."</p> })}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <div class="project-grid">
                <For
                    each=move || projects.get()
                    key=|project| project.id
                    children=move |project: Project| {
                        let id = project.id;
                        let edit_target = project.clone();
                        view! {
                            <div class="project-card">
                                <div class="project-card-header">
                                    <h2>{project.name.clone()}</h2>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=move |_| on_delete(id)
                                    />
                                </div>
                                <p class="project-description">{project.description.clone()}</p>
                                <div class="project-card-actions">
                                    <A href=format!("/projects/{}", id)>"Ver detalhes"</A>
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| {
                                            set_modal.set(Some(ProjectModalMode::Edit(edit_target.clone())))
                                        }
                                    >
                                        "Editar"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            {move || modal.get().map(|mode| view! {
                <ProjectFormModal mode=mode on_close=on_modal_close/>
            })}
        </div>
    }
}
