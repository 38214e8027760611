//! Project Details View
//!
//! One project with its embedded notes. "Nova nota" creates an empty note and
//! navigates straight into its editor; deleting a note removes it from the
//! local list without a re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::models::{Note, ProjectWithNotes};
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn ProjectDetails() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let project_id = Memo::new(move |_| {
        params
            .with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
            .unwrap_or_default()
    });

    let (project, set_project) = signal(None::<ProjectWithNotes>);
    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<&'static str>);

    // Load the project (with embedded notes) whenever the route id changes
    Effect::new(move |_| {
        let id = project_id.get();
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::get_project(&token, id).await {
                Ok(loaded) => {
                    set_notes.set(loaded.notes.clone());
                    set_project.set(Some(loaded));
                }
                Err(_) => set_error.set(Some("Erro ao carregar o projeto.")),
            }
            set_loading.set(false);
        });
    });

    let on_new_note = {
        let navigate = navigate.clone();
        move |_| {
            let id = project_id.get_untracked();
            let Some(token) = session.token().get_untracked() else {
                return;
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create_note(&token, id).await {
                    Ok(note) => {
                        navigate(&format!("/projects/{}/notes/{}", id, note.id), Default::default());
                    }
                    Err(_) => set_error.set(Some("Erro ao criar a nota.")),
                }
            });
        }
    };

    let on_delete_note = move |note_id: u64| {
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        spawn_local(async move {
            if api::delete_note(&token, note_id).await.is_ok() {
                set_notes.update(|list| list.retain(|n| n.id != note_id));
            }
        });
    };

    view! {
        <div class="project-details-page">
            <div class="back-link">
                <A href="/projects">"← Voltar para os projetos"</A>
            </div>

            {move || loading.get().then(|| view! { <p class="loading">"Carregando projeto..."</p> })}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            {move || project.get().map(|p| view! {
                <div class="project-details">
                    <h1>{p.name.clone()}</h1>
                    <p class="project-description">{p.description.clone()}</p>
                </div>
            })}

            <div class="notes-header">
                <h2>"Notas"</h2>
                <button class="new-note-btn" on:click=on_new_note>"Nova nota"</button>
            </div>

            <ul class="note-list">
                <For
                    each=move || notes.get()
                    key=|note| note.id
                    children=move |note: Note| {
                        let note_id = note.id;
                        view! {
                            <li class="note-row">
                                <A href=format!(
                                    "/projects/{}/notes/{}",
                                    project_id.get_untracked(),
                                    note_id,
                                )>
                                    {format!("Nota #{}", note.number)}
                                </A>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_| on_delete_note(note_id)
                                />
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
