use contracts::domain::a003_order::{Cart, Order, OrderStatus};
use contracts::domain::a004_payment::{Payment, PaymentSummary};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrderDetailVm {
    pub order: RwSignal<Option<Order>>,
    /// Selected in the status dropdown, saved separately
    pub status: RwSignal<OrderStatus>,
    /// Line items being edited
    pub cart: RwSignal<Cart>,
    pub payments: RwSignal<Vec<Payment>>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailVm {
    pub fn new() -> Self {
        Self {
            order: RwSignal::new(None),
            status: RwSignal::new(OrderStatus::default()),
            cart: RwSignal::new(Cart::new()),
            payments: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Replaces the order and resets the editors to its saved values.
    pub fn apply_order(&self, order: Order) {
        self.status.set(order.status);
        self.cart.set(Cart::from_lines(&order.items));
        self.order.set(Some(order));
    }

    pub fn summary(&self) -> PaymentSummary {
        let total = self.order.with(|o| o.as_ref().map(|o| o.total).unwrap_or(0.0));
        self.payments
            .with(|payments| PaymentSummary::from_payments(total, payments))
    }

    pub fn status_changed(&self) -> bool {
        self.order
            .with(|o| o.as_ref().map(|o| o.status != self.status.get()).unwrap_or(false))
    }

    pub fn items_changed(&self) -> bool {
        self.order
            .with(|o| o.as_ref().map(|o| self.cart.with(|c| items_differ(o, c))).unwrap_or(false))
    }
}

impl Default for OrderDetailVm {
    fn default() -> Self {
        Self::new()
    }
}

/// The edited cart no longer matches the saved lines.
pub fn items_differ(order: &Order, cart: &Cart) -> bool {
    Cart::from_lines(&order.items).to_update_items() != cart.to_update_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_price_item::{PriceItem, PriceType};
    use contracts::domain::a003_order::{DuplicatePolicy, OrderLine};

    fn item(id: &str) -> PriceItem {
        PriceItem {
            id: id.to_string(),
            name: id.to_string(),
            kind: PriceType::Fixed,
            unit_price: 100.0,
            points: None,
        }
    }

    fn order(lines: Vec<OrderLine>) -> Order {
        serde_json::from_value::<Order>(serde_json::json!({ "_id": "o1" }))
            .map(|mut o| {
                o.items = lines;
                o
            })
            .unwrap()
    }

    #[test]
    fn test_unchanged_cart_is_clean() {
        let order = order(vec![OrderLine::new(item("a"), 2)]);
        let cart = Cart::from_lines(&order.items);
        assert!(!items_differ(&order, &cart));
    }

    #[test]
    fn test_quantity_change_is_detected() {
        let order = order(vec![OrderLine::new(item("a"), 2)]);
        let mut cart = Cart::from_lines(&order.items);
        cart.add_item(item("a"), DuplicatePolicy::Increment);
        assert!(items_differ(&order, &cart));

        cart.set_quantity("a", 2);
        assert!(!items_differ(&order, &cart));
    }

    #[test]
    fn test_dangling_lines_do_not_count_as_changes() {
        let mut dangling = OrderLine::new(item("x"), 1);
        dangling.item = None;
        let order = order(vec![OrderLine::new(item("a"), 1), dangling]);
        let cart = Cart::from_lines(&order.items);
        assert!(!items_differ(&order, &cart));
    }
}
