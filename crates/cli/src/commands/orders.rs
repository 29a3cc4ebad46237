use crate::commands::{execute, CommandResult, RunOptions};

/// Loads the catalog first so order rows can resolve product names.
pub fn list(options: &RunOptions) -> CommandResult {
    execute(options, "orders list", |runtime, controller| {
        runtime.block_on(async {
            let catalog_ok = controller.refresh_products().await;
            controller.refresh_orders().await && catalog_ok
        })
    })
}

pub fn place(
    options: &RunOptions,
    product: i64,
    quantity: i64,
    weight: f64,
    distance: f64,
) -> CommandResult {
    execute(options, "orders place", |runtime, controller| {
        runtime.block_on(controller.place_order(product, quantity, weight, distance))
    })
}
