pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod ui;
