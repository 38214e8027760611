//! Delete Confirm Button Component
//!
//! Inline two-step delete: a × button that flips into a confirm/cancel pair,
//! so destructive actions never fire on a single stray click.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        {move || if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Excluir?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }.into_any()
        }}
    }
}
