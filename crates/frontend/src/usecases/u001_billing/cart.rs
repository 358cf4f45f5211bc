//! Cart store: the client-local, unsubmitted line items of one invoice.
//!
//! Invariants held by every operation:
//! - at most one line per product id
//! - every line has quantity >= 1
//! - lines stay in first-add order
//!
//! Name and unit price are captured when the product is first added and are
//! never re-read from the catalog; the server prices the invoice.

use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a003_invoice::InvoiceItemRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Quantity of a product in the cart, 0 when there is no line
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Add one unit of `product`; returns the line's new quantity
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        });
        1
    }

    /// Replace a line's quantity. `qty <= 0` removes the line; an unknown
    /// product is ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, qty: i64) {
        if qty <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(qty).unwrap_or(u32::MAX);
        }
    }

    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(current) = self.line(product_id).map(|l| l.quantity) {
            self.set_quantity(product_id, i64::from(current) + 1);
        }
    }

    /// Decrementing a line at quantity 1 removes it
    pub fn decrement(&mut self, product_id: ProductId) {
        if let Some(current) = self.line(product_id).map(|l| l.quantity) {
            self.set_quantity(product_id, i64::from(current) - 1);
        }
    }

    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(idx))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity`, recomputed on every call
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// `(product_id, quantity)` pairs in line order
    pub fn snapshot_items(&self) -> Vec<InvoiceItemRequest> {
        self.lines
            .iter()
            .map(|l| InvoiceItemRequest {
                product_id: l.product_id,
                quantity: l.quantity,
            })
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

#[cfg(test)]
pub(crate) fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        sku: format!("SKU-{id}"),
        price,
        stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_same_product_twice_increments() {
        let a = product(1, "A", 100.0, 10);
        let mut cart = Cart::new();
        cart.add(&a);
        assert_eq!(cart.add(&a), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId(1)), 2);
        assert_eq!(cart.total(), 200.0);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 100.0, 10));
        cart.add(&product(2, "B", 50.0, 10));
        cart.decrement(ProductId(1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId(2));
        assert_eq!(cart.total(), 50.0);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 2.5, 10));

        cart.set_quantity(ProductId(1), 4);
        assert_eq!(cart.quantity_of(ProductId(1)), 4);
        assert_eq!(cart.total(), 10.0);

        cart.set_quantity(ProductId(1), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 1.0, 10));
        let before = cart.clone();

        cart.set_quantity(ProductId(99), 5);
        cart.increment(ProductId(99));
        cart.decrement(ProductId(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_price_is_captured_at_add_time() {
        let mut cart = Cart::new();
        let mut a = product(1, "A", 100.0, 10);
        cart.add(&a);

        a.price = 999.0;
        a.name = "Renamed".into();
        cart.add(&a);

        let line = &cart.lines()[0];
        assert_eq!(line.unit_price, 100.0);
        assert_eq!(line.name, "A");
        assert_eq!(cart.total(), 200.0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, "C", 1.0, 1));
        cart.add(&product(1, "A", 1.0, 1));
        cart.add(&product(2, "B", 1.0, 1));
        cart.add(&product(3, "C", 1.0, 1));

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 1.0, 1));
        cart.add(&product(2, "B", 1.0, 1));

        assert!(cart.remove(ProductId(1)).is_some());
        assert!(cart.remove(ProductId(1)).is_none());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_snapshot_items() {
        let mut cart = Cart::new();
        cart.add(&product(5, "E", 1.0, 1));
        cart.add(&product(5, "E", 1.0, 1));
        cart.add(&product(2, "B", 1.0, 1));

        let items = cart.snapshot_items();
        assert_eq!(
            items,
            vec![
                InvoiceItemRequest { product_id: ProductId(5), quantity: 2 },
                InvoiceItemRequest { product_id: ProductId(2), quantity: 1 },
            ]
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Inc(i64),
        Dec(i64),
        Set(i64, i64),
        Remove(i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        let id = 1i64..6;
        prop_oneof![
            id.clone().prop_map(Op::Add),
            id.clone().prop_map(Op::Inc),
            id.clone().prop_map(Op::Dec),
            (id.clone(), -2i64..6).prop_map(|(i, q)| Op::Set(i, q)),
            id.prop_map(Op::Remove),
        ]
    }

    fn catalog_price(id: i64) -> f64 {
        // quarter steps keep the sums exact in f64
        id as f64 * 12.25
    }

    fn apply(cart: &mut Cart, op: &Op) {
        match *op {
            Op::Add(id) => {
                cart.add(&product(id, "P", catalog_price(id), 100));
            }
            Op::Inc(id) => cart.increment(ProductId(id)),
            Op::Dec(id) => cart.decrement(ProductId(id)),
            Op::Set(id, q) => cart.set_quantity(ProductId(id), q),
            Op::Remove(id) => {
                cart.remove(ProductId(id));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_lines_are_unique_and_positive(ops in proptest::collection::vec(op(), 0..60)) {
            let mut cart = Cart::new();
            for op in &ops {
                apply(&mut cart, op);
                let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
            }
        }

        #[test]
        fn prop_total_is_sum_of_lines(ops in proptest::collection::vec(op(), 0..60)) {
            let mut cart = Cart::new();
            for op in &ops {
                apply(&mut cart, op);
            }
            let expected: f64 = cart
                .lines()
                .iter()
                .map(|l| catalog_price(l.product_id.0) * f64::from(l.quantity))
                .sum();
            prop_assert_eq!(cart.total(), expected);
        }

        #[test]
        fn prop_removing_a_line_drops_exactly_its_contribution(
            ops in proptest::collection::vec(op(), 1..40),
            victim in 1i64..6,
        ) {
            let mut cart = Cart::new();
            for op in &ops {
                apply(&mut cart, op);
            }
            let before = cart.total();
            let contribution = cart.line(ProductId(victim)).map(CartLine::line_total).unwrap_or(0.0);
            cart.remove(ProductId(victim));
            prop_assert_eq!(before - cart.total(), contribution);
        }

        #[test]
        fn prop_decrement_never_goes_below_one(start in 1u32..20, steps in 0usize..30) {
            let mut cart = Cart::new();
            let p = product(1, "A", 1.0, 100);
            for _ in 0..start {
                cart.add(&p);
            }
            for _ in 0..steps {
                cart.decrement(ProductId(1));
                match cart.line(ProductId(1)) {
                    Some(line) => prop_assert!(line.quantity >= 1),
                    None => prop_assert_eq!(cart.quantity_of(ProductId(1)), 0),
                }
            }
            let expected = start.saturating_sub(steps as u32);
            prop_assert_eq!(cart.quantity_of(ProductId(1)), expected);
        }
    }
}
