use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::order::NewOrder;
use crate::domain::product::NewProduct;

/// Minimum shippable weight in kilograms.
pub const MIN_ORDER_WEIGHT: f64 = 0.1;
/// Minimum shipping distance in kilometers.
pub const MIN_ORDER_DISTANCE: f64 = 1.0;

/// Local form validation failures. Each form surfaces one combined message;
/// nothing reaches the network when validation fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nombre, precio y stock son obligatorios.")]
    InvalidProductInput,
    #[error("Complete producto, cantidad, peso y distancia con valores válidos.")]
    InvalidOrderInput,
}

/// Validates the create-product form: trimmed non-empty name, price >= 0,
/// integer stock >= 0.
pub fn new_product(name: &str, price: Decimal, stock: i64) -> Result<NewProduct, ValidationError> {
    let name = name.trim();
    let stock_ok = (0..=i64::from(u32::MAX)).contains(&stock);
    if name.is_empty() || price < Decimal::ZERO || !stock_ok {
        return Err(ValidationError::InvalidProductInput);
    }

    Ok(NewProduct { name: name.to_string(), price, stock: stock as u32 })
}

/// Validates the order form: product id >= 1, quantity >= 1, weight >= 0.1,
/// distance >= 1. All four must hold or the whole submission aborts.
pub fn new_order(
    product_id: i64,
    quantity: i64,
    weight: f64,
    distance: f64,
) -> Result<NewOrder, ValidationError> {
    let quantity_ok = (1..=i64::from(u32::MAX)).contains(&quantity);
    let weight_ok = weight.is_finite() && weight >= MIN_ORDER_WEIGHT;
    let distance_ok = distance.is_finite() && distance >= MIN_ORDER_DISTANCE;
    if product_id < 1 || !quantity_ok || !weight_ok || !distance_ok {
        return Err(ValidationError::InvalidOrderInput);
    }

    Ok(NewOrder { product_id, quantity: quantity as u32, weight, distance })
}
