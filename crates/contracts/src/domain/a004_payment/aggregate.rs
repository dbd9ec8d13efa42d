use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Efectivo")]
    Cash,
    #[serde(rename = "Tarjeta de Credito")]
    CreditCard,
    #[serde(rename = "Tarjeta de debito")]
    DebitCard,
    #[serde(rename = "Transferencia")]
    Transfer,
    /// Legacy values recorded before the method list was fixed
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    /// Methods offered in payment forms
    pub fn selectable() -> [PaymentMethod; 4] {
        [
            PaymentMethod::Cash,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Transfer,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::CreditCard => "Tarjeta de Credito",
            PaymentMethod::DebitCard => "Tarjeta de debito",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Other => "Otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::CreditCard => "Tarjeta de Crédito",
            PaymentMethod::DebitCard => "Tarjeta de Débito",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Other => "Otro",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::selectable().into_iter().find(|m| m.code() == code)
    }
}

/// Payment recorded against an order. Overpayment is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AggregateRoot for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Pago"
    }

    fn list_name() -> &'static str {
        "Pagos"
    }
}

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

impl CreatePaymentRequest {
    /// Parses the amount typed in the payment form; it must be a positive number.
    pub fn from_input(order_id: &str, raw_amount: &str, method: PaymentMethod) -> Result<Self, String> {
        let amount = raw_amount
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| "El monto ingresado no es válido".to_string())?;
        Ok(Self {
            amount,
            method,
            order_id: order_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_values() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, r#""Tarjeta de Credito""#);
        let m: PaymentMethod = serde_json::from_str(r#""Cheque""#).unwrap();
        assert_eq!(m, PaymentMethod::Other);
    }

    #[test]
    fn test_create_request_from_input() {
        let req = CreatePaymentRequest::from_input("o1", "1500,50", PaymentMethod::Transfer).unwrap();
        assert_eq!(req.amount, 1500.5);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"amount":1500.5,"method":"Transferencia","orderId":"o1"}"#
        );
        assert!(CreatePaymentRequest::from_input("o1", "", PaymentMethod::Cash).is_err());
        assert!(CreatePaymentRequest::from_input("o1", "abc", PaymentMethod::Cash).is_err());
        assert!(CreatePaymentRequest::from_input("o1", "0", PaymentMethod::Cash).is_err());
        assert!(CreatePaymentRequest::from_input("o1", "-5", PaymentMethod::Cash).is_err());
    }
}
