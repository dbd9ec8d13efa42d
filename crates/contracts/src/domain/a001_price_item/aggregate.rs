use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::lenient_points;

// ============================================================================
// Price type
// ============================================================================

/// How an item is priced.
///
/// Per-garment items are weighted by `points` (a shirt is 1, a coat is 3);
/// fixed items cost `price` per unit regardless of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceType {
    #[serde(rename = "por_prenda")]
    PerGarment,
    #[default]
    #[serde(rename = "fijo")]
    Fixed,
}

impl PriceType {
    pub fn all() -> [PriceType; 2] {
        [PriceType::PerGarment, PriceType::Fixed]
    }

    /// Wire code, also used as `<option value>`
    pub fn code(&self) -> &'static str {
        match self {
            PriceType::PerGarment => "por_prenda",
            PriceType::Fixed => "fijo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceType::PerGarment => "Por prenda",
            PriceType::Fixed => "Fijo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog entry: a garment or service with its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PriceType,
    #[serde(rename = "price", default)]
    pub unit_price: f64,
    #[serde(
        default,
        deserialize_with = "lenient_points",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceItemError {
    #[error("El nombre no puede estar vacío")]
    EmptyName,
    #[error("El precio de \"{0}\" no es válido")]
    InvalidPrice(String),
    #[error("Los puntos de \"{0}\" deben ser al menos 1")]
    InvalidPoints(String),
}

impl PriceItem {
    /// Point weight applied to the unit price; fixed items weigh 1.
    pub fn multiplier(&self) -> f64 {
        match self.kind {
            PriceType::PerGarment => f64::from(self.points.unwrap_or(1)),
            PriceType::Fixed => 1.0,
        }
    }

    /// Price of one unit after applying points. Non-finite or negative
    /// prices count as 0.
    pub fn effective_unit_price(&self) -> f64 {
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return 0.0;
        }
        self.unit_price * self.multiplier()
    }

    pub fn validate(&self) -> Result<(), PriceItemError> {
        if self.name.trim().is_empty() {
            return Err(PriceItemError::EmptyName);
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(PriceItemError::InvalidPrice(self.name.clone()));
        }
        if self.points == Some(0) {
            return Err(PriceItemError::InvalidPoints(self.name.clone()));
        }
        Ok(())
    }

    /// Text for the item picker ("Camisa (Por prenda, 2 pts)").
    pub fn option_label(&self) -> String {
        match self.kind {
            PriceType::PerGarment => format!(
                "{} ({}, {} pts)",
                self.name,
                self.kind.label(),
                self.points.unwrap_or(1)
            ),
            PriceType::Fixed => format!("{} ({})", self.name, self.kind.label()),
        }
    }
}

impl AggregateRoot for PriceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "prices"
    }

    fn element_name() -> &'static str {
        "Prenda"
    }

    fn list_name() -> &'static str {
        "Precios"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body for creating or updating a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItemDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PriceType,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl PriceItemDto {
    pub fn new_blank() -> Self {
        Self {
            name: String::new(),
            kind: PriceType::PerGarment,
            price: 0.0,
            points: Some(1),
        }
    }

    pub fn validate(&self) -> Result<(), PriceItemError> {
        self.to_item(String::new()).validate()
    }

    fn to_item(&self, id: String) -> PriceItem {
        PriceItem {
            id,
            name: self.name.clone(),
            kind: self.kind,
            unit_price: self.price,
            points: self.points,
        }
    }
}

impl From<&PriceItem> for PriceItemDto {
    fn from(item: &PriceItem) -> Self {
        Self {
            name: item.name.trim().to_string(),
            kind: item.kind,
            price: item.unit_price,
            // Points only matter for per-garment pricing
            points: match item.kind {
                PriceType::PerGarment => Some(item.points.unwrap_or(1)),
                PriceType::Fixed => item.points,
            },
        }
    }
}

/// Items in `edited` that differ from their counterpart in `original`.
///
/// Items without a counterpart are reported as changed too.
pub fn changed_items<'a>(original: &[PriceItem], edited: &'a [PriceItem]) -> Vec<&'a PriceItem> {
    edited
        .iter()
        .filter(|item| original.iter().find(|o| o.id == item.id) != Some(*item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: PriceType, price: f64, points: Option<u32>) -> PriceItem {
        PriceItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            kind,
            unit_price: price,
            points,
        }
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"_id":"p1","name":"Camisa","type":"por_prenda","price":1500,"points":2}"#;
        let parsed: PriceItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, PriceType::PerGarment);
        assert_eq!(parsed.unit_price, 1500.0);
        assert_eq!(parsed.points, Some(2));
    }

    #[test]
    fn test_fractional_points_do_not_drop_the_catalog() {
        let json = r#"[
            {"_id":"p1","name":"Camisa","type":"por_prenda","price":100,"points":1.5},
            {"_id":"p2","name":"Saco","type":"por_prenda","price":100,"points":0.2},
            {"_id":"p3","name":"Toalla","type":"fijo","price":50,"points":"x"}
        ]"#;
        let items: Vec<PriceItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].points, Some(2));
        assert_eq!(items[1].points, Some(1));
        assert_eq!(items[2].points, None);
        assert!(items.iter().all(|i| i.validate().is_ok()));
    }

    #[test]
    fn test_effective_unit_price() {
        assert_eq!(item("a", PriceType::PerGarment, 100.0, Some(3)).effective_unit_price(), 300.0);
        assert_eq!(item("b", PriceType::PerGarment, 100.0, None).effective_unit_price(), 100.0);
        assert_eq!(item("c", PriceType::Fixed, 250.0, Some(4)).effective_unit_price(), 250.0);
        assert_eq!(item("d", PriceType::Fixed, f64::NAN, None).effective_unit_price(), 0.0);
        assert_eq!(item("e", PriceType::Fixed, -5.0, None).effective_unit_price(), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(item("a", PriceType::Fixed, 10.0, None).validate().is_ok());
        assert_eq!(
            item("a", PriceType::PerGarment, 10.0, Some(0)).validate(),
            Err(PriceItemError::InvalidPoints("Item a".into()))
        );
        assert!(matches!(
            item("a", PriceType::Fixed, -1.0, None).validate(),
            Err(PriceItemError::InvalidPrice(_))
        ));
        let mut blank = item("a", PriceType::Fixed, 10.0, None);
        blank.name = "  ".into();
        assert_eq!(blank.validate(), Err(PriceItemError::EmptyName));
    }

    #[test]
    fn test_changed_items() {
        let original = vec![
            item("a", PriceType::Fixed, 10.0, None),
            item("b", PriceType::PerGarment, 20.0, Some(1)),
        ];
        let mut edited = original.clone();
        assert!(changed_items(&original, &edited).is_empty());

        edited[1].unit_price = 25.0;
        let changed = changed_items(&original, &edited);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].id, "b");
    }

    #[test]
    fn test_price_type_codes() {
        assert_eq!(PriceType::from_code("fijo"), Some(PriceType::Fixed));
        assert_eq!(PriceType::from_code("por_prenda"), Some(PriceType::PerGarment));
        assert_eq!(PriceType::from_code("otro"), None);
        assert_eq!(PriceItem::record_path("x1"), "/api/prices/x1");
    }
}
