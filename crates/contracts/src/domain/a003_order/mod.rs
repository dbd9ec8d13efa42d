pub mod aggregate;
pub mod cart;

pub use aggregate::{
    CareLevel, CreateOrderItem, CustomerRef, CustomerSummary, DeliveryType, Order, OrderLine,
    OrderListQuery, OrderStatus, UpdateOrderItem, UpdateOrderRequest,
};
pub use cart::{line_subtotal, order_total, AddOutcome, Cart, DuplicatePolicy};
