use serde::{Deserialize, Serialize};

use crate::domain::a003_order::{CareLevel, CreateOrderItem, DeliveryType, OrderStatus};
use crate::domain::a004_payment::PaymentMethod;

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub status: OrderStatus,
    #[serde(rename = "deliveryType")]
    pub delivery_type: DeliveryType,
    #[serde(rename = "careLevel")]
    pub care_level: CareLevel,
    pub description: String,
    pub total: f64,
    pub paid: f64,
    pub method: PaymentMethod,
    pub items: Vec<CreateOrderItem>,
}
