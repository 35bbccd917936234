//! UI components for the activity panel.

pub mod activity_card;
pub mod activity_panel;
pub mod status_message;
