//! Customer details (MVVM):
//! - view_model.rs: form signals and DTO building
//! - view.rs: create/edit modal
//! - profile.rs: profile tab with stats and order history

mod profile;
mod view;
mod view_model;

pub use profile::CustomerProfile;
pub use view::CustomerForm;
pub use view_model::CustomerFormVm;
