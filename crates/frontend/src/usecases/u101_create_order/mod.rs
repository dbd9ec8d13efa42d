pub mod api;
pub mod finalize;
mod view;

pub use view::CreateOrderWizard;
