//! Domain model, validation, order-flow state machine, session cache, and
//! configuration for the Mostrador storefront. No I/O lives here.

pub mod config;
pub mod domain;
pub mod flow;
pub mod session;
pub mod validation;

pub use domain::format_money;
pub use domain::order::{NewOrder, Order, OrderCosts, DEFAULT_ORDER_STATUS};
pub use domain::product::{NewProduct, Product};
pub use flow::{FlowStage, OrderFlow};
pub use session::{FetchToken, Session};
pub use validation::ValidationError;
