pub mod order;
pub mod product;

use rust_decimal::Decimal;

/// Renders a monetary amount the way the storefront displays it: a dollar
/// sign and exactly two decimal places.
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}
