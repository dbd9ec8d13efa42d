//! Item selection for an order and the pricing rules applied to it.

use crate::domain::a001_price_item::PriceItem;

use super::aggregate::{CreateOrderItem, OrderLine, UpdateOrderItem};

/// Subtotal of one line: effective unit price times quantity.
///
/// A line without an item, or with an invalid price, is worth 0.
pub fn line_subtotal(line: &OrderLine) -> f64 {
    match &line.item {
        Some(item) => item.effective_unit_price() * f64::from(line.quantity),
        None => 0.0,
    }
}

/// Sum of all line subtotals; 0 for no lines.
pub fn order_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(line_subtotal).sum()
}

/// What to do when an item already in the cart is added again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Bump the quantity of the existing line
    #[default]
    Increment,
    /// Leave the cart untouched
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Incremented,
    AlreadyPresent,
}

/// Selected items, at most one line per catalog item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<OrderLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from existing order lines, dropping lines without an
    /// item and merging repeated items.
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        let mut cart = Self::new();
        for line in lines {
            let Some(item) = &line.item else { continue };
            if line.quantity == 0 {
                continue;
            }
            match cart.position(&item.id) {
                Some(idx) => cart.lines[idx].quantity += line.quantity,
                None => cart.lines.push(line.clone()),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.position(item_id).is_some()
    }

    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.position(item_id).map(|idx| self.lines[idx].quantity)
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.item_id() == Some(item_id))
    }

    pub fn add_item(&mut self, item: PriceItem, policy: DuplicatePolicy) -> AddOutcome {
        match (self.position(&item.id), policy) {
            (Some(idx), DuplicatePolicy::Increment) => {
                self.lines[idx].quantity = self.lines[idx].quantity.saturating_add(1);
                AddOutcome::Incremented
            }
            (Some(_), DuplicatePolicy::Reject) => AddOutcome::AlreadyPresent,
            (None, _) => {
                self.lines.push(OrderLine::new(item, 1));
                AddOutcome::Added
            }
        }
    }

    /// Sets the quantity of a line; anything below 1 removes it.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove(item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(idx) = self.position(item_id) {
            self.lines[idx].quantity = quantity;
        }
    }

    /// Applies a raw quantity from an input field. Non-numeric input is
    /// ignored so a half-typed value never clears the line.
    pub fn set_quantity_input(&mut self, item_id: &str, raw: &str) {
        if let Ok(quantity) = raw.trim().parse::<i64>() {
            self.set_quantity(item_id, quantity);
        }
    }

    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id() != Some(item_id));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        order_total(&self.lines)
    }

    /// Lines as sent when creating an order.
    pub fn to_request_items(&self) -> Vec<CreateOrderItem> {
        self.lines
            .iter()
            .filter_map(|l| {
                l.item_id().map(|id| CreateOrderItem {
                    item_id: id.to_string(),
                    quantity: l.quantity,
                })
            })
            .collect()
    }

    /// Lines as sent when editing an existing order.
    pub fn to_update_items(&self) -> Vec<UpdateOrderItem> {
        self.to_request_items()
            .into_iter()
            .map(|i| UpdateOrderItem {
                item: i.item_id,
                quantity: i.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_price_item::PriceType;

    fn per_garment(id: &str, price: f64, points: Option<u32>) -> PriceItem {
        PriceItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind: PriceType::PerGarment,
            unit_price: price,
            points,
        }
    }

    fn fixed(id: &str, price: f64) -> PriceItem {
        PriceItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind: PriceType::Fixed,
            unit_price: price,
            points: None,
        }
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line_subtotal(&OrderLine::new(per_garment("a", 100.0, Some(2)), 3)), 600.0);
        assert_eq!(line_subtotal(&OrderLine::new(per_garment("b", 100.0, None), 3)), 300.0);
        assert_eq!(line_subtotal(&OrderLine::new(fixed("c", 50.0), 4)), 200.0);
        assert_eq!(line_subtotal(&OrderLine { item: None, quantity: 5 }), 0.0);
        assert_eq!(line_subtotal(&OrderLine::new(fixed("d", f64::INFINITY), 1)), 0.0);
    }

    #[test]
    fn test_order_total_matches_sum_and_ignores_order() {
        let lines = vec![
            OrderLine::new(per_garment("a", 100.0, Some(2)), 3),
            OrderLine::new(fixed("b", 50.0), 4),
            OrderLine::new(per_garment("c", 75.5, None), 2),
        ];
        let expected = 600.0 + 200.0 + 151.0;
        assert_eq!(order_total(&lines), expected);

        let mut reversed = lines.clone();
        reversed.reverse();
        assert_eq!(order_total(&reversed), expected);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), 0.0);
        assert_eq!(order_total(&[]), 0.0);
    }

    #[test]
    fn test_add_item_increment_policy() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(fixed("a", 10.0), DuplicatePolicy::Increment), AddOutcome::Added);
        assert_eq!(
            cart.add_item(fixed("a", 10.0), DuplicatePolicy::Increment),
            AddOutcome::Incremented
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(2));
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_add_item_reject_policy() {
        let mut cart = Cart::new();
        cart.add_item(fixed("a", 10.0), DuplicatePolicy::Reject);
        let before = cart.clone();
        assert_eq!(
            cart.add_item(fixed("a", 10.0), DuplicatePolicy::Reject),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(fixed("a", 10.0), DuplicatePolicy::default());
        cart.set_quantity("a", 4);
        let once = cart.clone();
        cart.set_quantity("a", 4);
        assert_eq!(cart, once);
        assert_eq!(cart.quantity_of("a"), Some(4));
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add_item(fixed("a", 10.0), DuplicatePolicy::default());
        cart.add_item(fixed("b", 10.0), DuplicatePolicy::default());
        cart.set_quantity("a", 0);
        assert!(!cart.contains("a"));
        cart.set_quantity("b", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_input_ignores_garbage() {
        let mut cart = Cart::new();
        cart.add_item(fixed("a", 10.0), DuplicatePolicy::default());
        cart.set_quantity_input("a", "abc");
        cart.set_quantity_input("a", "");
        assert_eq!(cart.quantity_of("a"), Some(1));
        cart.set_quantity_input("a", " 7 ");
        assert_eq!(cart.quantity_of("a"), Some(7));
        cart.set_quantity_input("a", "0");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_lines_merges_and_drops_dangling() {
        let lines = vec![
            OrderLine::new(fixed("a", 10.0), 1),
            OrderLine { item: None, quantity: 2 },
            OrderLine::new(fixed("a", 10.0), 2),
        ];
        let cart = Cart::from_lines(&lines);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(3));
    }

    #[test]
    fn test_request_items() {
        let mut cart = Cart::new();
        cart.add_item(fixed("a", 10.0), DuplicatePolicy::default());
        cart.set_quantity("a", 2);
        let json = serde_json::to_string(&cart.to_request_items()).unwrap();
        assert_eq!(json, r#"[{"itemId":"a","quantity":2}]"#);
        assert_eq!(cart.to_update_items()[0].item, "a");
    }
}
