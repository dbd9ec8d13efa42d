//! Submission of a completed wizard.
//!
//! Order of operations: validate locally, create the customer when none was
//! selected, post the order, then download the receipt. Only the receipt is
//! allowed to fail without failing the whole submission.

use contracts::domain::a003_order::Order;
use contracts::usecases::u101_create_order::{OrderWizard, WizardError};
use thiserror::Error;

use super::api::OrderGateway;

pub const ORDER_CREATED: &str = "Orden creada correctamente";
pub const RECEIPT_WARNING: &str = "La orden fue creada, pero no se pudo descargar el comprobante.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinalizeError {
    #[error("{0}")]
    Invalid(#[from] WizardError),
    #[error("{0}")]
    CustomerCreation(String),
    /// Carries the customer created earlier in the same submission so a
    /// retry reuses it
    #[error("{message}")]
    OrderCreation {
        message: String,
        created_customer_id: Option<String>,
    },
}

impl FinalizeError {
    pub fn created_customer_id(&self) -> Option<&str> {
        match self {
            FinalizeError::OrderCreation {
                created_customer_id, ..
            } => created_customer_id.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeOutcome {
    pub order: Order,
    /// Set when the new customer was created during this submission
    pub created_customer_id: Option<String>,
    /// Receipt download failure, reported as a warning
    pub receipt_error: Option<String>,
}

impl FinalizeOutcome {
    pub fn receipt_downloaded(&self) -> bool {
        self.receipt_error.is_none()
    }
}

pub async fn finalize<G: OrderGateway>(
    gateway: &G,
    wizard: &OrderWizard,
) -> Result<FinalizeOutcome, FinalizeError> {
    wizard.validate_for_submit()?;

    let (customer_id, created_customer_id) = match wizard.customer.existing_id() {
        Some(id) => (id.to_string(), None),
        None => {
            let customer = gateway
                .create_customer(&wizard.customer.to_customer_dto())
                .await
                .map_err(|e| {
                    log::error!("Customer creation failed: {}", e);
                    FinalizeError::CustomerCreation(e.user_message("Error al crear el cliente"))
                })?;
            log::info!("Created customer {}", customer.id);
            (customer.id.clone(), Some(customer.id))
        }
    };

    let request = wizard.build_request(&customer_id)?;
    let order = gateway.create_order(&request).await.map_err(|e| {
        log::error!("Order creation failed: {}", e);
        FinalizeError::OrderCreation {
            message: e.user_message("Error al crear la orden"),
            created_customer_id: created_customer_id.clone(),
        }
    })?;
    log::info!("Created order {}", order.id);

    let receipt_error = match gateway.download_receipt(&order.id).await {
        Ok(()) => None,
        Err(e) => {
            log::warn!("Receipt for order {} not downloaded: {}", order.id, e);
            Some(e)
        }
    };

    Ok(FinalizeOutcome {
        order,
        created_customer_id,
        receipt_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::ApiError;
    use contracts::domain::a001_price_item::{PriceItem, PriceType};
    use contracts::domain::a002_customer::{Customer, CustomerDto};
    use contracts::usecases::u101_create_order::{CreateOrderRequest, OrderRules};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateCustomer(String),
        CreateOrder(CreateOrderRequest),
        Receipt(String),
    }

    #[derive(Default)]
    struct RecordingGateway {
        calls: RefCell<Vec<Call>>,
        fail_customer: bool,
        fail_order: Cell<bool>,
        fail_receipt: bool,
    }

    impl RecordingGateway {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    fn backend_error(message: &str) -> ApiError {
        ApiError::Backend {
            status: 400,
            message: Some(message.to_string()),
        }
    }

    impl OrderGateway for RecordingGateway {
        async fn create_customer(&self, dto: &CustomerDto) -> Result<Customer, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::CreateCustomer(dto.first_name.clone()));
            if self.fail_customer {
                return Err(backend_error("Teléfono duplicado"));
            }
            Ok(serde_json::from_value(serde_json::json!({
                "_id": "c-new",
                "firstName": dto.first_name,
                "lastName": dto.last_name,
            }))
            .unwrap())
        }

        async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
            self.calls.borrow_mut().push(Call::CreateOrder(request.clone()));
            if self.fail_order.get() {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(serde_json::from_value(serde_json::json!({ "_id": "o-new", "orderId": 7 })).unwrap())
        }

        async fn download_receipt(&self, order_id: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Receipt(order_id.to_string()));
            if self.fail_receipt {
                return Err("No se pudo descargar el comprobante".into());
            }
            Ok(())
        }
    }

    fn shirt() -> PriceItem {
        PriceItem {
            id: "p1".into(),
            name: "Camisa".into(),
            kind: PriceType::Fixed,
            unit_price: 100.0,
            points: None,
        }
    }

    fn new_customer_wizard() -> OrderWizard {
        let mut w = OrderWizard::default();
        w.customer.first_name = "Ana".into();
        w.customer.last_name = "Gómez".into();
        w.add_item(shirt());
        w
    }

    #[test]
    fn test_missing_customer_makes_no_calls() {
        let gateway = RecordingGateway::default();
        let mut wizard = OrderWizard::default();
        wizard.customer.first_name = "Ana".into();

        let result = block_on(finalize(&gateway, &wizard));
        assert_eq!(result, Err(FinalizeError::Invalid(WizardError::MissingCustomer)));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_invalid_paid_amount_makes_no_calls() {
        let gateway = RecordingGateway::default();
        let mut wizard = new_customer_wizard();
        wizard.payment.paid_input = "-20".into();

        let result = block_on(finalize(&gateway, &wizard));
        assert_eq!(result, Err(FinalizeError::Invalid(WizardError::InvalidPaidAmount)));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_required_items_block_submission() {
        let gateway = RecordingGateway::default();
        let mut wizard = OrderWizard::new(OrderRules {
            require_items: true,
            ..Default::default()
        });
        wizard.customer.select_existing("c1");

        let result = block_on(finalize(&gateway, &wizard));
        assert_eq!(result, Err(FinalizeError::Invalid(WizardError::NoItems)));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_customer_failure_prevents_order() {
        let gateway = RecordingGateway {
            fail_customer: true,
            ..Default::default()
        };
        let wizard = new_customer_wizard();

        let result = block_on(finalize(&gateway, &wizard));
        assert_eq!(
            result,
            Err(FinalizeError::CustomerCreation("Teléfono duplicado".into()))
        );
        assert_eq!(gateway.calls(), vec![Call::CreateCustomer("Ana".into())]);
    }

    #[test]
    fn test_new_customer_id_is_used_for_order() {
        let gateway = RecordingGateway::default();
        let mut wizard = new_customer_wizard();
        wizard.payment.paid_input = "50".into();

        let outcome = block_on(finalize(&gateway, &wizard)).unwrap();
        assert_eq!(outcome.created_customer_id.as_deref(), Some("c-new"));
        assert!(outcome.receipt_downloaded());

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        match &calls[1] {
            Call::CreateOrder(req) => {
                assert_eq!(req.customer_id, "c-new");
                assert_eq!(req.total, 100.0);
                assert_eq!(req.paid, 50.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(calls[2], Call::Receipt("o-new".into()));
    }

    #[test]
    fn test_existing_customer_skips_creation() {
        let gateway = RecordingGateway::default();
        let mut wizard = new_customer_wizard();
        wizard.customer.select_existing("c1");

        let outcome = block_on(finalize(&gateway, &wizard)).unwrap();
        assert_eq!(outcome.created_customer_id, None);
        let calls = gateway.calls();
        assert!(matches!(&calls[0], Call::CreateOrder(req) if req.customer_id == "c1"));
    }

    #[test]
    fn test_order_failure_uses_fallback_message() {
        let gateway = RecordingGateway {
            fail_order: Cell::new(true),
            ..Default::default()
        };
        let mut wizard = new_customer_wizard();
        wizard.customer.select_existing("c1");

        let result = block_on(finalize(&gateway, &wizard));
        assert_eq!(
            result,
            Err(FinalizeError::OrderCreation {
                message: "Error al crear la orden".into(),
                created_customer_id: None,
            })
        );
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn test_retry_after_order_failure_reuses_created_customer() {
        let gateway = RecordingGateway {
            fail_order: Cell::new(true),
            ..Default::default()
        };
        let mut wizard = new_customer_wizard();

        let err = block_on(finalize(&gateway, &wizard)).unwrap_err();
        assert_eq!(err.created_customer_id(), Some("c-new"));
        if let Some(id) = err.created_customer_id() {
            wizard.customer.select_existing(id);
        }

        gateway.fail_order.set(false);
        let outcome = block_on(finalize(&gateway, &wizard)).unwrap();
        assert_eq!(outcome.order.id, "o-new");
        assert_eq!(outcome.created_customer_id, None);

        let customer_calls = gateway
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateCustomer(_)))
            .count();
        assert_eq!(customer_calls, 1);
        match gateway.calls().last() {
            Some(Call::Receipt(id)) => assert_eq!(id, "o-new"),
            other => panic!("unexpected call {:?}", other),
        }
        let retried_for = gateway.calls().iter().rev().find_map(|c| match c {
            Call::CreateOrder(req) => Some(req.customer_id.clone()),
            _ => None,
        });
        assert_eq!(retried_for.as_deref(), Some("c-new"));
    }

    #[test]
    fn test_receipt_failure_is_not_fatal() {
        let gateway = RecordingGateway {
            fail_receipt: true,
            ..Default::default()
        };
        let mut wizard = new_customer_wizard();
        wizard.customer.select_existing("c1");

        let outcome = block_on(finalize(&gateway, &wizard)).unwrap();
        assert_eq!(outcome.order.id, "o-new");
        assert!(!outcome.receipt_downloaded());
    }
}
