pub mod badge;
pub mod error_body;
pub mod pagination;
pub mod serde_helpers;

pub use badge::BadgeVariant;
pub use error_body::ApiErrorBody;
pub use pagination::{page_range, ListEnvelope, Page, PageSlot};
