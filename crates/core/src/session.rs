use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::flow::OrderFlow;

/// Token handed out when a fetch is issued. Applying a result whose token is
/// older than the last applied one is rejected, so a slow stale response can
/// never overwrite a newer cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Default)]
struct FetchGate {
    issued: u64,
    applied: u64,
}

impl FetchGate {
    fn issue(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    fn try_apply(&mut self, token: FetchToken) -> bool {
        if token.0 <= self.applied {
            return false;
        }
        self.applied = token.0;
        true
    }
}

/// All client-side state for one session: the cached product and order
/// collections, the current selection, and the progress indicator.
///
/// Collections are only ever replaced wholesale by a successful fetch; a
/// failed fetch leaves them untouched.
#[derive(Debug, Default)]
pub struct Session {
    products: Vec<Product>,
    orders: Vec<Order>,
    selected: Option<i64>,
    pub flow: OrderFlow,
    product_gate: FetchGate,
    order_gate: FetchGate,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selected_product(&self) -> Option<i64> {
        self.selected
    }

    /// Looks a product up in the cache; never a network call.
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn begin_product_fetch(&mut self) -> FetchToken {
        self.product_gate.issue()
    }

    pub fn begin_order_fetch(&mut self) -> FetchToken {
        self.order_gate.issue()
    }

    /// Replaces the product cache when `token` is still current. Returns
    /// whether the replacement happened.
    pub fn apply_products(&mut self, token: FetchToken, products: Vec<Product>) -> bool {
        if !self.product_gate.try_apply(token) {
            return false;
        }
        self.products = products;
        true
    }

    /// Replaces the order cache when `token` is still current.
    pub fn apply_orders(&mut self, token: FetchToken, orders: Vec<Order>) -> bool {
        if !self.order_gate.try_apply(token) {
            return false;
        }
        self.orders = orders;
        true
    }

    /// Marks a product as selected and rewinds the progress indicator to its
    /// first stage. The id is not checked against the cache.
    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
        self.flow.select();
    }

    /// Keeps an existing selection while it still matches a cached product;
    /// otherwise falls back to the first listed one. An empty catalog leaves
    /// the selection untouched. Returns the new selection when it changed.
    pub fn reconcile_selection(&mut self) -> Option<i64> {
        let still_valid =
            self.selected.is_some_and(|id| self.products.iter().any(|product| product.id == id));
        if still_valid {
            return None;
        }

        let first = self.products.first().map(|product| product.id)?;
        self.select(first);
        Some(first)
    }
}
