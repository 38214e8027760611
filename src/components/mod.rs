//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod layout;
mod project_modal;
mod protected;
mod save_status;

pub use delete_confirm_button::DeleteConfirmButton;
pub use layout::AppLayout;
pub use project_modal::{ProjectFormModal, ProjectModalMode, ProjectModalResult};
pub use protected::RequireSession;
pub use save_status::SaveStatusBadge;
