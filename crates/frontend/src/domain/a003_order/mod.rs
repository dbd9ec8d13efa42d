pub mod api;
pub mod receipt;
pub mod ui;
