use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable item owned by the remote catalog. The client only ever holds
/// a read-only copy that may be stale until the next refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl Product {
    /// Title shown on the product card; unnamed products get a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Producto"
        } else {
            &self.name
        }
    }

    /// Option label used by the order form selector: `name ($price)`.
    pub fn selector_label(&self) -> String {
        format!("{} (${:.2})", self.name, self.price.round_dp(2))
    }
}

/// Payload for `POST /v1/products`. Only constructed through
/// [`crate::validation::new_product`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::Product;

    fn widget() -> Product {
        Product { id: 1, name: "Widget".to_string(), price: "9.5".parse().unwrap(), stock: Some(3) }
    }

    #[test]
    fn selector_label_includes_formatted_price() {
        assert_eq!(widget().selector_label(), "Widget ($9.50)");
    }

    #[test]
    fn blank_name_falls_back_to_generic_label() {
        let unnamed = Product { name: "  ".to_string(), ..widget() };
        assert_eq!(unnamed.display_name(), "Producto");
    }

    #[test]
    fn missing_fields_default_on_decode() {
        let product: Product = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.price, rust_decimal::Decimal::ZERO);
        assert_eq!(product.stock, None);
    }
}
