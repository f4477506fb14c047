//! Shared UI components.

pub mod deal_card;
pub mod loading_spinner;
pub mod nav_bar;
pub mod protected;
