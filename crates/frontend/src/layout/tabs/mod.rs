//! Tab management: `page` wraps one tab's content, `registry` maps tab keys
//! to views and `tab_labels` holds their titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
