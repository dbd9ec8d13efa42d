//! Payment status of an order, derived from its total and the amount paid.

use crate::shared::BadgeVariant;

use super::aggregate::Payment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Partial,
    Paid,
}

impl PaymentStatus {
    /// Nothing paid is always `Pending`, even for a zero total.
    pub fn derive(total: f64, paid: f64) -> Self {
        if paid <= 0.0 || paid.is_nan() {
            PaymentStatus::Pending
        } else if paid >= total {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Partial
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendiente",
            PaymentStatus::Partial => "Parcial",
            PaymentStatus::Paid => "Pagado",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Pending => BadgeVariant::Error,
            PaymentStatus::Partial => BadgeVariant::Warning,
            PaymentStatus::Paid => BadgeVariant::Success,
        }
    }
}

/// Amount still owed; never negative.
pub fn outstanding_balance(total: f64, paid: f64) -> f64 {
    (total - paid).max(0.0)
}

/// Financial summary of an order computed from its payments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSummary {
    pub total: f64,
    pub paid: f64,
    pub outstanding: f64,
    pub status: PaymentStatus,
}

impl PaymentSummary {
    pub fn new(total: f64, paid: f64) -> Self {
        Self {
            total,
            paid,
            outstanding: outstanding_balance(total, paid),
            status: PaymentStatus::derive(total, paid),
        }
    }

    pub fn from_payments(total: f64, payments: &[Payment]) -> Self {
        Self::new(total, payments.iter().map(|p| p.amount).sum())
    }

    /// Payments exceed the total. Allowed, the UI only warns.
    pub fn is_overpaid(&self) -> bool {
        self.paid > self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_payment::PaymentMethod;

    fn payment(amount: f64) -> Payment {
        Payment {
            id: format!("p{}", amount),
            order_id: Some("o1".into()),
            amount,
            method: PaymentMethod::Cash,
            created_at: None,
        }
    }

    #[test]
    fn test_derive_boundaries() {
        assert_eq!(PaymentStatus::derive(100.0, 0.0), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::derive(100.0, 50.0), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::derive(100.0, 100.0), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::derive(100.0, 150.0), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::derive(0.0, 0.0), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::derive(100.0, -10.0), PaymentStatus::Pending);
    }

    #[test]
    fn test_outstanding_never_negative() {
        assert_eq!(outstanding_balance(100.0, 30.0), 70.0);
        assert_eq!(outstanding_balance(100.0, 150.0), 0.0);
        assert_eq!(outstanding_balance(0.0, 0.0), 0.0);
        for paid in [0.0, 1.0, 99.99, 100.0, 1e9] {
            assert!(outstanding_balance(100.0, paid) >= 0.0);
        }
    }

    #[test]
    fn test_badges() {
        assert_eq!(PaymentStatus::Paid.badge(), BadgeVariant::Success);
        assert_eq!(PaymentStatus::Partial.badge(), BadgeVariant::Warning);
        assert_eq!(PaymentStatus::Pending.badge(), BadgeVariant::Error);
    }

    #[test]
    fn test_summary_from_payments() {
        let summary = PaymentSummary::from_payments(1000.0, &[payment(400.0), payment(200.0)]);
        assert_eq!(summary.paid, 600.0);
        assert_eq!(summary.outstanding, 400.0);
        assert_eq!(summary.status, PaymentStatus::Partial);
        assert!(!summary.is_overpaid());

        let over = PaymentSummary::from_payments(500.0, &[payment(400.0), payment(200.0)]);
        assert_eq!(over.status, PaymentStatus::Paid);
        assert_eq!(over.outstanding, 0.0);
        assert!(over.is_overpaid());
    }
}
