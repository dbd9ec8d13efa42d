pub mod common;
pub mod u101_create_order;
