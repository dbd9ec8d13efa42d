pub mod a001_price_item;
pub mod a002_customer;
pub mod a003_order;
pub mod a004_payment;
