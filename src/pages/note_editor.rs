//! Note Editor View
//!
//! Side-by-side editing surface and rendered preview. Edits feed the
//! auto-save machine: a debounce window coalesces bursts into one persist
//! call, a manual "save now" path shares the same in-flight guard, and the
//! status badge follows the machine's transitions. The persist call always
//! serializes the then-current document.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::autosave::{Autosave, SaveStatus, DEBOUNCE_MS};
use crate::components::SaveStatusBadge;
use crate::markdown::render_markdown;
use crate::session::{use_session, SessionStateStoreFields};

/// Delay before the preview follows new content at the bottom
const FOLLOW_SCROLL_DELAY_MS: u32 = 100;
/// How close to the bottom still counts as following the output
const FOLLOW_SCROLL_SLACK_PX: i32 = 48;

fn near_bottom(el: &web_sys::HtmlDivElement) -> bool {
    el.scroll_top() + el.client_height() >= el.scroll_height() - FOLLOW_SCROLL_SLACK_PX
}

#[component]
pub fn NoteEditor() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();

    let project_id = Memo::new(move |_| {
        params
            .with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
            .unwrap_or_default()
    });
    let note_id = Memo::new(move |_| {
        params
            .with(|p| p.get("note_id").and_then(|id| id.parse::<u64>().ok()))
            .unwrap_or_default()
    });

    let (content, set_content) = signal(String::new());
    let (note_number, set_note_number) = signal(0u32);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<&'static str>);
    let (status, set_status) = signal(SaveStatus::None);

    let machine = StoredValue::new(Autosave::default());
    let preview_ref = NodeRef::<leptos::html::Div>::new();

    // Load the note whenever the route id changes
    Effect::new(move |_| {
        let id = note_id.get();
        let Some(token) = session.token().get_untracked() else {
            return;
        };
        machine.set_value(Autosave::default());
        set_status.set(SaveStatus::None);
        set_loading.set(true);
        spawn_local(async move {
            match api::get_note(&token, id).await {
                Ok(note) => {
                    set_content.set(note.content);
                    set_note_number.set(note.number);
                }
                Err(_) => set_error.set(Some("Erro ao carregar a nota.")),
            }
            set_loading.set(false);
        });
    });

    // Issue the persist call, plus at most one queued follow-up. The machine
    // guarantees a single call in flight, so the status badge can only be
    // updated by the live call.
    let persist = Callback::new(move |_: ()| {
        spawn_local(async move {
            loop {
                let Some(token) = session.token().get_untracked() else {
                    break;
                };
                set_status.set(SaveStatus::Saving);
                let document = content.get_untracked();
                let ok = api::update_note(&token, note_id.get_untracked(), &document)
                    .await
                    .is_ok();
                set_status.set(if ok { SaveStatus::Saved } else { SaveStatus::Failed });
                let follow_up = machine
                    .try_update_value(|m| m.finished(ok))
                    .unwrap_or_default();
                if !follow_up {
                    break;
                }
            }
        });
    });

    let on_input = move |ev| {
        // decide whether to follow before the preview grows
        let follows = preview_ref
            .get_untracked()
            .map(|el| near_bottom(&el))
            .unwrap_or(false);

        set_content.set(event_target_value(&ev));
        let generation = machine.try_update_value(|m| m.edited()).unwrap_or_default();

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            let fire = machine
                .try_update_value(|m| m.timer_elapsed(generation))
                .unwrap_or_default();
            if fire {
                persist.run(());
            }
        });

        if follows {
            spawn_local(async move {
                TimeoutFuture::new(FOLLOW_SCROLL_DELAY_MS).await;
                if let Some(el) = preview_ref.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            });
        }
    };

    let on_save_now = move |_| {
        let fire = machine.try_update_value(|m| m.save_now()).unwrap_or_default();
        if fire {
            persist.run(());
        } else {
            // already in flight; one follow-up queued
            set_status.set(SaveStatus::Saving);
        }
    };

    let rendered_html = move || render_markdown(&content.get());

    view! {
        <div class="note-editor-page">
            <div class="back-link">
                <A href=move || format!("/projects/{}", project_id.get())>
                    "← Voltar para o projeto"
                </A>
            </div>

            {move || loading.get().then(|| view! { <p class="loading">"Carregando nota..."</p> })}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <div class="note-editor-header">
                <h1>{move || format!("Editando a nota #{}", note_number.get())}</h1>
                <div class="note-editor-controls">
                    <SaveStatusBadge status=status/>
                    <button class="save-now-btn" on:click=on_save_now>"Salvar agora"</button>
                </div>
            </div>

            <div class="note-editor-body">
                <div class="note-edit-pane">
                    <div class="pane-header">"Edição"</div>
                    <textarea
                        class="note-textarea"
                        placeholder="Escreva sua nota em Markdown..."
                        prop:value=move || content.get()
                        on:input=on_input
                    ></textarea>
                </div>

                <div class="note-preview-pane">
                    <div class="pane-header">"Pré-visualização"</div>
                    <div class="note-preview-content" node_ref=preview_ref inner_html=rendered_html></div>
                </div>
            </div>
        </div>
    }
}
