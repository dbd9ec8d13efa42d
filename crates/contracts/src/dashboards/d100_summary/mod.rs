pub mod dto;

pub use dto::{DashboardStats, DelayedOrder, DelayedOrders, StatusCount, StatusShare, TopCustomer};
