//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod header;
mod mission_card;
mod mission_list;
mod new_mission_form;
mod overview;
mod progress_bar;
mod stat_cards;
mod tab_bar;
mod toast_stack;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use mission_card::MissionCard;
pub use mission_list::MissionList;
pub use new_mission_form::NewMissionForm;
pub use overview::Overview;
pub use progress_bar::ProgressBar;
pub use stat_cards::StatCards;
pub use tab_bar::TabBar;
pub use toast_stack::ToastStack;
