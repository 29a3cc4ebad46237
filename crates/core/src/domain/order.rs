use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status label used when the server omits one.
pub const DEFAULT_ORDER_STATUS: &str = "CONFIRMED";

/// An order as served by `GET /v1/orders` or echoed by `POST /v1/orders`.
/// Monetary fields may be absent on older records; [`Order::costs`] resolves
/// the display values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub shipping_cost: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Display-resolved monetary columns of one order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderCosts {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl Order {
    /// Subtotal falls back to the total, shipping to zero. A served total is
    /// authoritative, an explicit zero included; only an absent total is
    /// recomputed as subtotal + shipping.
    pub fn costs(&self) -> OrderCosts {
        let subtotal = self.subtotal.or(self.total).unwrap_or_default();
        let shipping = self.shipping_cost.unwrap_or_default();
        let total = self.total.unwrap_or(subtotal + shipping);
        OrderCosts { subtotal, shipping, total }
    }

    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|status| !status.trim().is_empty())
            .unwrap_or(DEFAULT_ORDER_STATUS)
    }
}

/// Payload for `POST /v1/orders`. Only constructed through
/// [`crate::validation::new_order`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub product_id: i64,
    pub quantity: u32,
    pub weight: f64,
    pub distance: f64,
}
