//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod footer;
mod notice_bar;
mod task_modal;
mod task_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use notice_bar::NoticeBar;
pub use task_modal::TaskModal;
pub use task_row::TaskRow;
