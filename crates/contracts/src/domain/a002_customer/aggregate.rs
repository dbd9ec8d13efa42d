use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// Aggregate
// ============================================================================

/// Laundry customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl AggregateRoot for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios".into());
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
        }
    }
}

/// Aggregates shown on the customer profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    #[serde(rename = "totalOrders", default)]
    pub total_orders: u32,
    #[serde(rename = "totalSpent", default)]
    pub total_spent: f64,
    #[serde(rename = "lastOrderDate", default)]
    pub last_order_date: Option<DateTime<Utc>>,
}

/// Query parameters of `GET /api/customers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerListQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CustomerListQuery {
    pub fn new(page: usize, limit: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            limit,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_wire() {
        let json = r#"{
            "_id": "c1",
            "firstName": "Ana",
            "lastName": "Gómez",
            "phone": "11-5555-0000",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T10:00:00.000Z"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.full_name(), "Ana Gómez");
        assert_eq!(c.email, None);
        assert!(c.created_at.is_some());
    }

    #[test]
    fn test_dto_validate() {
        let mut dto = CustomerDto {
            first_name: "Ana".into(),
            last_name: " ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.last_name = "Gómez".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_list_query_skips_blank_search() {
        let q = CustomerListQuery::new(0, 10, "   ");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, None);
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("search").is_none());

        let q = CustomerListQuery::new(2, 10, " ana ");
        assert_eq!(q.search.as_deref(), Some("ana"));
    }
}
