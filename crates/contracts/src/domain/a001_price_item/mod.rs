pub mod aggregate;

pub use aggregate::{changed_items, PriceItem, PriceItemDto, PriceItemError, PriceType};
