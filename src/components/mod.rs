//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod header;
mod loading_spinner;
mod notice;
mod task_card;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use notice::{Notice, NoticeBanner};
pub use task_card::TaskCard;
