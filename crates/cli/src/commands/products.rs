use rust_decimal::Decimal;

use crate::commands::{execute, CommandResult, RunOptions};

pub fn list(options: &RunOptions) -> CommandResult {
    execute(options, "products list", |runtime, controller| {
        runtime.block_on(controller.refresh_products())
    })
}

pub fn add(options: &RunOptions, name: &str, price: Decimal, stock: i64) -> CommandResult {
    execute(options, "products add", |runtime, controller| {
        runtime.block_on(controller.create_product(name, price, stock))
    })
}
