pub mod aggregate;
pub mod status;

pub use aggregate::{CreatePaymentRequest, Payment, PaymentMethod};
pub use status::{outstanding_balance, PaymentStatus, PaymentSummary};
