//! Order detail (MVVM):
//! - view_model.rs: loaded order, editable cart and payments
//! - view.rs: page with status selector, summary and actions
//! - items.rs: line-item editor
//! - payments.rs: payment list and form

mod items;
mod payments;
mod view;
mod view_model;

pub use items::CartEditor;
pub use view::OrderDetail;
pub use view_model::OrderDetailVm;
