//! Save Status Badge
//!
//! Small indicator for the editor-sync cycle: saving, saved, or failed.

use leptos::prelude::*;

use crate::autosave::SaveStatus;

/// Status indicator driven by the auto-save machine
#[component]
pub fn SaveStatusBadge(status: ReadSignal<SaveStatus>) -> impl IntoView {
    let label = move || match status.get() {
        SaveStatus::None => "",
        SaveStatus::Saving => "Salvando...",
        SaveStatus::Saved => "Salvo",
        SaveStatus::Failed => "Erro ao salvar",
    };
    let class = move || match status.get() {
        SaveStatus::None => "save-status",
        SaveStatus::Saving => "save-status saving",
        SaveStatus::Saved => "save-status saved",
        SaveStatus::Failed => "save-status failed",
    };

    view! { <span class=class>{label}</span> }
}
