//! State machine of the three-step order creation form.
//!
//! The wizard owns every form field so moving between steps never loses
//! data. Network work (creating the customer, posting the order, fetching the
//! receipt) happens in the frontend once `build_request` succeeds.

use thiserror::Error;

use crate::domain::a001_price_item::PriceItem;
use crate::domain::a002_customer::CustomerDto;
use crate::domain::a003_order::{AddOutcome, Cart, CareLevel, DeliveryType, DuplicatePolicy, OrderStatus};
use crate::domain::a004_payment::{PaymentMethod, PaymentSummary};

use super::request::CreateOrderRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    Customer,
    ItemsAndDetails,
    PaymentSummary,
}

impl WizardStep {
    pub fn all() -> [WizardStep; 3] {
        [
            WizardStep::Customer,
            WizardStep::ItemsAndDetails,
            WizardStep::PaymentSummary,
        ]
    }

    /// 1-based position shown in the step indicator
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Customer => 1,
            WizardStep::ItemsAndDetails => 2,
            WizardStep::PaymentSummary => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Customer => "Cliente",
            WizardStep::ItemsAndDetails => "Prendas y detalles",
            WizardStep::PaymentSummary => "Pago y resumen",
        }
    }

    fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Customer => Some(WizardStep::ItemsAndDetails),
            WizardStep::ItemsAndDetails => Some(WizardStep::PaymentSummary),
            WizardStep::PaymentSummary => None,
        }
    }

    fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Customer => None,
            WizardStep::ItemsAndDetails => Some(WizardStep::Customer),
            WizardStep::PaymentSummary => Some(WizardStep::ItemsAndDetails),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Seleccioná un cliente existente o ingresá nombre y apellido")]
    MissingCustomer,
    #[error("Debe seleccionar al menos una prenda.")]
    NoItems,
    #[error("Monto pagado inválido")]
    InvalidPaidAmount,
}

// ============================================================================
// Step forms
// ============================================================================

/// Step 1: either an existing customer or the data of a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerStep {
    pub existing_customer_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl CustomerStep {
    pub fn existing_id(&self) -> Option<&str> {
        self.existing_customer_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Selecting an existing customer; an empty id switches back to a new one.
    pub fn select_existing(&mut self, id: &str) {
        let id = id.trim();
        self.existing_customer_id = (!id.is_empty()).then(|| id.to_string());
    }

    pub fn validate(&self) -> Result<(), WizardError> {
        if self.existing_id().is_some() {
            return Ok(());
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(WizardError::MissingCustomer);
        }
        Ok(())
    }

    /// Payload for creating the new customer.
    pub fn to_customer_dto(&self) -> CustomerDto {
        CustomerDto {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
        .trimmed()
    }
}

/// Step 2 details besides the items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsStep {
    pub status: OrderStatus,
    pub delivery_type: DeliveryType,
    pub care_level: CareLevel,
    pub description: String,
}

/// Step 3: amount paid up front and how.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentStep {
    /// Raw input; blank means nothing paid
    pub paid_input: String,
    pub method: PaymentMethod,
}

impl PaymentStep {
    pub fn paid_amount(&self) -> Result<f64, WizardError> {
        let raw = self.paid_input.trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or(WizardError::InvalidPaidAmount)
    }
}

/// Business rules that vary between deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderRules {
    /// Refuse to leave step 2 (and to submit) with an empty cart
    pub require_items: bool,
    pub duplicate_policy: DuplicatePolicy,
}

// ============================================================================
// Wizard
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderWizard {
    step: WizardStep,
    rules: OrderRules,
    pub customer: CustomerStep,
    pub details: DetailsStep,
    pub payment: PaymentStep,
    pub cart: Cart,
}

impl OrderWizard {
    pub fn new(rules: OrderRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn rules(&self) -> OrderRules {
        self.rules
    }

    pub fn is_last_step(&self) -> bool {
        self.step.following().is_none()
    }

    /// Checks the gate that guards leaving `step`.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::Customer => self.customer.validate(),
            WizardStep::ItemsAndDetails => {
                if self.rules.require_items && self.cart.is_empty() {
                    Err(WizardError::NoItems)
                } else {
                    Ok(())
                }
            }
            WizardStep::PaymentSummary => self.payment.paid_amount().map(|_| ()),
        }
    }

    /// Advances one step if the current one is valid. On the last step this
    /// is a no-op.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let Some(following) = self.step.following() else {
            return Ok(self.step);
        };
        self.validate_step(self.step)?;
        self.step = following;
        Ok(self.step)
    }

    /// Goes back one step. Entered data is kept.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(preceding) = self.step.preceding() {
            self.step = preceding;
        }
        self.step
    }

    pub fn add_item(&mut self, item: PriceItem) -> AddOutcome {
        self.cart.add_item(item, self.rules.duplicate_policy)
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn paid_amount(&self) -> Result<f64, WizardError> {
        self.payment.paid_amount()
    }

    /// Summary shown on step 3. An unparsable paid input counts as 0 here;
    /// submission rejects it.
    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary::new(self.total(), self.paid_amount().unwrap_or(0.0))
    }

    /// Every gate that must hold before anything is sent.
    pub fn validate_for_submit(&self) -> Result<(), WizardError> {
        self.customer.validate()?;
        if self.rules.require_items && self.cart.is_empty() {
            return Err(WizardError::NoItems);
        }
        self.paid_amount()?;
        Ok(())
    }

    /// Order payload for `customer_id` (the selected customer or the one just
    /// created).
    pub fn build_request(&self, customer_id: &str) -> Result<CreateOrderRequest, WizardError> {
        let paid = self.paid_amount()?;
        Ok(CreateOrderRequest {
            customer_id: customer_id.to_string(),
            status: self.details.status,
            delivery_type: self.details.delivery_type,
            care_level: self.details.care_level,
            description: self.details.description.trim().to_string(),
            total: self.total(),
            paid,
            method: self.payment.method,
            items: self.cart.to_request_items(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_price_item::PriceType;

    fn shirt() -> PriceItem {
        PriceItem {
            id: "p1".into(),
            name: "Camisa".into(),
            kind: PriceType::PerGarment,
            unit_price: 100.0,
            points: Some(2),
        }
    }

    fn with_new_customer() -> OrderWizard {
        let mut w = OrderWizard::default();
        w.customer.first_name = "Ana".into();
        w.customer.last_name = "Gómez".into();
        w
    }

    #[test]
    fn test_step_one_gate_blocks_without_customer() {
        let mut w = OrderWizard::default();
        w.customer.first_name = "Ana".into();
        assert_eq!(w.next(), Err(WizardError::MissingCustomer));
        assert_eq!(w.step(), WizardStep::Customer);
    }

    #[test]
    fn test_existing_customer_passes_gate() {
        let mut w = OrderWizard::default();
        w.customer.select_existing("c1");
        assert_eq!(w.next(), Ok(WizardStep::ItemsAndDetails));

        w.customer.select_existing("  ");
        assert_eq!(w.customer.existing_id(), None);
    }

    #[test]
    fn test_items_step_unguarded_by_default() {
        let mut w = with_new_customer();
        w.next().unwrap();
        assert_eq!(w.next(), Ok(WizardStep::PaymentSummary));
        assert_eq!(w.next(), Ok(WizardStep::PaymentSummary));
    }

    #[test]
    fn test_items_step_guarded_when_required() {
        let mut w = with_new_customer();
        w.rules = OrderRules {
            require_items: true,
            ..Default::default()
        };
        w.next().unwrap();
        assert_eq!(w.next(), Err(WizardError::NoItems));
        assert_eq!(w.step(), WizardStep::ItemsAndDetails);
        w.add_item(shirt());
        assert_eq!(w.next(), Ok(WizardStep::PaymentSummary));
    }

    #[test]
    fn test_previous_keeps_data() {
        let mut w = with_new_customer();
        w.next().unwrap();
        w.add_item(shirt());
        w.details.description = "Mancha en el cuello".into();
        w.next().unwrap();
        w.payment.paid_input = "50".into();

        assert_eq!(w.previous(), WizardStep::ItemsAndDetails);
        assert_eq!(w.previous(), WizardStep::Customer);
        assert_eq!(w.previous(), WizardStep::Customer);
        assert_eq!(w.customer.first_name, "Ana");
        assert_eq!(w.cart.len(), 1);
        assert_eq!(w.details.description, "Mancha en el cuello");
        assert_eq!(w.payment.paid_input, "50");
    }

    #[test]
    fn test_paid_amount_parsing() {
        let mut w = OrderWizard::default();
        assert_eq!(w.paid_amount(), Ok(0.0));
        w.payment.paid_input = "150,5".into();
        assert_eq!(w.paid_amount(), Ok(150.5));
        w.payment.paid_input = "-1".into();
        assert_eq!(w.paid_amount(), Err(WizardError::InvalidPaidAmount));
        w.payment.paid_input = "abc".into();
        assert_eq!(w.paid_amount(), Err(WizardError::InvalidPaidAmount));
        w.payment.paid_input = "inf".into();
        assert_eq!(w.paid_amount(), Err(WizardError::InvalidPaidAmount));
    }

    #[test]
    fn test_duplicate_policy_from_rules() {
        let mut w = OrderWizard::new(OrderRules {
            require_items: false,
            duplicate_policy: DuplicatePolicy::Reject,
        });
        assert_eq!(w.add_item(shirt()), AddOutcome::Added);
        assert_eq!(w.add_item(shirt()), AddOutcome::AlreadyPresent);
        assert_eq!(w.cart.quantity_of("p1"), Some(1));
    }

    #[test]
    fn test_build_request() {
        let mut w = with_new_customer();
        w.add_item(shirt());
        w.add_item(shirt());
        w.details.delivery_type = DeliveryType::Urgent;
        w.details.description = "  planchar  ".into();
        w.payment.paid_input = "100".into();
        w.payment.method = PaymentMethod::Transfer;

        let req = w.build_request("c42").unwrap();
        assert_eq!(req.customer_id, "c42");
        assert_eq!(req.total, 400.0);
        assert_eq!(req.paid, 100.0);
        assert_eq!(req.description, "planchar");
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].quantity, 2);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["customerId"], "c42");
        assert_eq!(json["status"], "Recibido");
        assert_eq!(json["deliveryType"], "urgente");
        assert_eq!(json["careLevel"], "normal");
        assert_eq!(json["method"], "Transferencia");
        assert_eq!(json["items"][0]["itemId"], "p1");
    }

    #[test]
    fn test_summary_tolerates_bad_input() {
        let mut w = with_new_customer();
        w.add_item(shirt());
        w.payment.paid_input = "x".into();
        let s = w.summary();
        assert_eq!(s.total, 200.0);
        assert_eq!(s.paid, 0.0);
        assert!(w.validate_for_submit().is_err());
    }
}
