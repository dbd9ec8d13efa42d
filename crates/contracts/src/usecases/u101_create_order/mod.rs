pub mod request;
pub mod wizard;

pub use request::CreateOrderRequest;
pub use wizard::{
    CustomerStep, DetailsStep, OrderRules, OrderWizard, PaymentStep, WizardError, WizardStep,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateOrder;

impl UseCaseMetadata for CreateOrder {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "create_order"
    }

    fn display_name() -> &'static str {
        "Nueva orden"
    }

    fn description() -> &'static str {
        "Alta de una orden en tres pasos: cliente, prendas y detalles, pago"
    }
}
