use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_price_item::PriceItem;
use crate::domain::a004_payment::PaymentStatus;
use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::{lenient_quantity, populated_or_none, string_or_number};
use crate::shared::BadgeVariant;

// ============================================================================
// Enums
// ============================================================================

/// Processing status of an order.
///
/// The lifecycle is Received → InProgress → Completed → Delivered, but the
/// status selector accepts any transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Recibido")]
    Received,
    #[serde(rename = "En progreso")]
    InProgress,
    #[serde(rename = "Completado")]
    Completed,
    #[serde(rename = "Entregado")]
    Delivered,
    /// Any status this client does not know about
    #[serde(rename = "Desconocido")]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Received,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Delivered,
        ]
    }

    /// Wire value, also the label shown in the UI. `all()` leaves out
    /// `Unknown`, so selectors never offer it.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Recibido",
            OrderStatus::InProgress => "En progreso",
            OrderStatus::Completed => "Completado",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Unknown => "Desconocido",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            OrderStatus::Received => BadgeVariant::Primary,
            OrderStatus::InProgress => BadgeVariant::Warning,
            OrderStatus::Completed => BadgeVariant::Success,
            OrderStatus::Delivered => BadgeVariant::Neutral,
            OrderStatus::Unknown => BadgeVariant::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryType {
    #[default]
    #[serde(rename = "estándar")]
    Standard,
    #[serde(rename = "urgente")]
    Urgent,
}

impl DeliveryType {
    pub fn all() -> [DeliveryType; 2] {
        [DeliveryType::Standard, DeliveryType::Urgent]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryType::Standard => "estándar",
            DeliveryType::Urgent => "urgente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Standard => "Estándar",
            DeliveryType::Urgent => "Urgente",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CareLevel {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "delicado")]
    Delicate,
}

impl CareLevel {
    pub fn all() -> [CareLevel; 2] {
        [CareLevel::Normal, CareLevel::Delicate]
    }

    pub fn code(&self) -> &'static str {
        match self {
            CareLevel::Normal => "normal",
            CareLevel::Delicate => "delicado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareLevel::Normal => "Normal",
            CareLevel::Delicate => "Delicado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Populated customer reference embedded in an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// `customerId` is either the bare id or the populated customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Populated(CustomerSummary),
    Id(String),
}

impl CustomerRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            CustomerRef::Populated(c) => c.id.as_deref(),
            CustomerRef::Id(id) => Some(id),
        }
    }

    pub fn display_name(&self) -> Option<String> {
        match self {
            CustomerRef::Populated(c) => {
                Some(format!("{} {}", c.first_name, c.last_name).trim().to_string())
            }
            CustomerRef::Id(_) => None,
        }
    }

    pub fn summary(&self) -> Option<&CustomerSummary> {
        match self {
            CustomerRef::Populated(c) => Some(c),
            CustomerRef::Id(_) => None,
        }
    }
}

/// One line of an order. The item is held by value so later catalog edits do
/// not change the order; it is `None` when the backend returns a dangling
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, deserialize_with = "populated_or_none")]
    pub item: Option<PriceItem>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: PriceItem, quantity: u32) -> Self {
        Self {
            item: Some(item),
            quantity,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable sequence number
    #[serde(rename = "orderId", default, deserialize_with = "string_or_number")]
    pub order_id: Option<String>,
    #[serde(rename = "customerId", default)]
    pub customer: Option<CustomerRef>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub paid: f64,
    #[serde(rename = "deliveryType", default)]
    pub delivery_type: DeliveryType,
    #[serde(rename = "careLevel", default)]
    pub care_level: CareLevel,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .and_then(CustomerRef::display_name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Cliente desconocido".to_string())
    }

    pub fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::derive(self.total, self.paid)
    }

    /// Label used in headers ("#42"), falling back to the backend id
    pub fn number_label(&self) -> String {
        format!("#{}", self.order_id.as_deref().unwrap_or(&self.id))
    }

    /// Lines that still reference a catalog item
    pub fn valid_lines(&self) -> Vec<OrderLine> {
        self.items.iter().filter(|l| l.item.is_some()).cloned().collect()
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Orden"
    }

    fn list_name() -> &'static str {
        "Órdenes"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Line of a create-order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderItem {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub quantity: u32,
}

/// Line of an update-items payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderItem {
    pub item: String,
    pub quantity: u32,
}

/// Body of `PUT /api/orders/:id`; only present fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<UpdateOrderItem>>,
}

impl UpdateOrderRequest {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            items: None,
        }
    }

    pub fn items(items: Vec<UpdateOrderItem>) -> Self {
        Self {
            status: None,
            items: Some(items),
        }
    }
}

/// Query parameters of `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_populated_wire() {
        let json = r#"{
            "_id": "o1",
            "orderId": 42,
            "customerId": {"_id": "c1", "firstName": "Ana", "lastName": "Gómez"},
            "status": "En progreso",
            "items": [
                {"item": {"_id": "p1", "name": "Camisa", "type": "por_prenda", "price": 100, "points": 2}, "quantity": 3},
                {"item": "dangling-id", "quantity": 1},
                {"item": null, "quantity": 1}
            ],
            "total": 600,
            "paid": 100,
            "deliveryType": "urgente",
            "careLevel": "delicado",
            "createdAt": "2024-05-10T12:00:00.000Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id.as_deref(), Some("42"));
        assert_eq!(order.customer_name(), "Ana Gómez");
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.items.len(), 3);
        assert_eq!(order.valid_lines().len(), 1);
        assert_eq!(order.delivery_type, DeliveryType::Urgent);
        assert_eq!(order.care_level, CareLevel::Delicate);
        assert_eq!(order.payment_status(), PaymentStatus::Partial);
        assert_eq!(order.number_label(), "#42");
    }

    #[test]
    fn test_order_with_bare_customer_id() {
        let json = r#"{"_id":"o2","customerId":"c9","status":"Recibido","total":0,"paid":0}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer.as_ref().and_then(|c| c.id()), Some("c9"));
        assert_eq!(order.customer_name(), "Cliente desconocido");
        assert_eq!(order.number_label(), "#o2");
    }

    #[test]
    fn test_unknown_status_and_bad_quantity_keep_the_order() {
        let json = r#"{
            "_id": "o3",
            "status": "Archivado",
            "items": [
                {"item": {"_id": "p1", "name": "Camisa", "type": "fijo", "price": 100}},
                {"item": {"_id": "p2", "name": "Saco", "type": "fijo", "price": 50}, "quantity": 2.4}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.status.badge(), BadgeVariant::Neutral);
        assert_eq!(order.items[0].quantity, 0);
        assert_eq!(order.items[1].quantity, 2);
        assert!(!OrderStatus::all().contains(&OrderStatus::Unknown));
    }

    #[test]
    fn test_status_codes_and_badges() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::Received.badge(), BadgeVariant::Primary);
        assert_eq!(OrderStatus::InProgress.badge(), BadgeVariant::Warning);
        assert_eq!(OrderStatus::Completed.badge(), BadgeVariant::Success);
        assert_eq!(OrderStatus::Delivered.badge(), BadgeVariant::Neutral);
    }

    #[test]
    fn test_update_request_only_sends_present_fields() {
        let json = serde_json::to_string(&UpdateOrderRequest::status(OrderStatus::Completed)).unwrap();
        assert_eq!(json, r#"{"status":"Completado"}"#);

        let json = serde_json::to_string(&UpdateOrderRequest::items(vec![UpdateOrderItem {
            item: "p1".into(),
            quantity: 2,
        }]))
        .unwrap();
        assert_eq!(json, r#"{"items":[{"item":"p1","quantity":2}]}"#);
    }

    #[test]
    fn test_list_query_skips_empty_filters() {
        let q = OrderListQuery {
            page: 1,
            limit: 10,
            status: None,
            search: None,
            from: None,
            to: None,
        };
        assert_eq!(serde_json::to_string(&q).unwrap(), r#"{"page":1,"limit":10}"#);
    }
}
