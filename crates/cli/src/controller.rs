use rust_decimal::Decimal;
use tracing::{debug, warn};

use mostrador_api::StoreApi;
use mostrador_core::{format_money, validation, FlowStage, Order, Session};

use crate::view::{OrderResult, OrderRow, Section, SelectorOption, View};

/// Drives the whole storefront: it owns the [`Session`] cache, talks to the
/// store through a [`StoreApi`], and renders through a [`View`]. Every
/// operation brackets its work between `loading` and `loaded` for its section
/// and reports failures there instead of bubbling them up.
pub struct Controller<A, V> {
    api: A,
    view: V,
    session: Session,
}

impl<A: StoreApi, V: View> Controller<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view, session: Session::new() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Reloads the catalog. On success the cache is replaced wholesale and
    /// both the product list and the selector re-render; on failure the
    /// previous cache stays visible behind the error message.
    pub async fn refresh_products(&mut self) -> bool {
        self.view.loading(Section::Products);
        let token = self.session.begin_product_fetch();

        let outcome = match self.api.list_products().await {
            Ok(products) => {
                if self.session.apply_products(token, products) {
                    self.render_products();
                }
                true
            }
            Err(error) => {
                warn!(error = %error, "product refresh failed");
                self.view.error(Section::Products, &format!("Error al cargar productos: {error}"));
                false
            }
        };

        self.view.loaded(Section::Products);
        outcome
    }

    fn render_products(&mut self) {
        let auto_selected = self.session.reconcile_selection();

        if self.session.products().is_empty() {
            self.view.empty(Section::Products);
        } else {
            self.view.products(self.session.products());
        }
        self.view.selector(&self.selector_options(), self.session.selected_product());

        if auto_selected.is_some() {
            self.view.flow(self.session.flow.stage());
        }
    }

    fn selector_options(&self) -> Vec<SelectorOption> {
        self.session
            .products()
            .iter()
            .map(|product| SelectorOption { id: product.id, label: product.selector_label() })
            .collect()
    }

    /// Marks a product as chosen and rewinds the progress indicator to its
    /// first stage.
    pub fn select_product(&mut self, id: i64) {
        self.session.select(id);
        self.view.selector(&self.selector_options(), self.session.selected_product());
        self.view.flow(self.session.flow.stage());
    }

    /// Validates and submits the create-product form. A successful creation
    /// confirms, clears the form and reloads the catalog.
    pub async fn create_product(&mut self, name: &str, price: Decimal, stock: i64) -> bool {
        self.view.loading(Section::CreateProduct);

        let request = match validation::new_product(name, price, stock) {
            Ok(request) => request,
            Err(error) => {
                self.view.error(Section::CreateProduct, &error.to_string());
                self.view.loaded(Section::CreateProduct);
                return false;
            }
        };

        let outcome = match self.api.create_product(&request).await {
            Ok(echoed) => {
                debug!(id = echoed.as_ref().map(|product| product.id), "product created");
                self.view.notice("Producto creado correctamente.");
                self.view.reset_form(Section::CreateProduct);
                self.refresh_products().await;
                true
            }
            Err(error) => {
                self.view.error(Section::CreateProduct, &format!("Error al crear producto: {error}"));
                false
            }
        };

        self.view.loaded(Section::CreateProduct);
        outcome
    }

    /// Validates and submits the order form. Validation failures never reach
    /// the network. A confirmed order shows the result panel, then reloads
    /// the catalog and the order history.
    pub async fn place_order(
        &mut self,
        product_id: i64,
        quantity: i64,
        weight: f64,
        distance: f64,
    ) -> bool {
        let request = match validation::new_order(product_id, quantity, weight, distance) {
            Ok(request) => request,
            Err(error) => {
                self.view.error(Section::OrderForm, &error.to_string());
                return false;
            }
        };

        self.view.loading(Section::OrderForm);

        let outcome = match self.api.create_order(&request).await {
            Ok(order) => {
                self.show_order_result(&order);
                self.view.reset_form(Section::OrderForm);
                self.refresh_products().await;
                self.refresh_orders().await;
                true
            }
            Err(error) => {
                warn!(error = %error, product_id, "order submission failed");
                self.view.error(Section::OrderForm, &format!("Error al crear orden: {error}"));
                false
            }
        };

        self.view.loaded(Section::OrderForm);
        outcome
    }

    fn show_order_result(&mut self, order: &Order) {
        self.session.flow.advance(FlowStage::OrderPlaced);
        self.session.flow.advance(FlowStage::ShippingComputed);
        self.session.flow.complete();
        self.view.flow(self.session.flow.stage());

        let costs = order.costs();
        self.view.order_result(&OrderResult {
            id: order_id_label(order),
            status: order.status_label().to_string(),
            subtotal: format_money(costs.subtotal),
            shipping: format_money(costs.shipping),
            total: format_money(costs.total),
            raw: serde_json::to_string_pretty(order).unwrap_or_default(),
        });
    }

    /// Reloads the order history. Product names resolve against the current
    /// catalog cache; orders referencing unknown products keep a generic
    /// `Producto #<id>` label.
    pub async fn refresh_orders(&mut self) -> bool {
        self.view.loading(Section::Orders);
        let token = self.session.begin_order_fetch();

        let outcome = match self.api.list_orders().await {
            Ok(orders) => {
                if self.session.apply_orders(token, orders) {
                    self.render_orders();
                }
                true
            }
            Err(error) => {
                warn!(error = %error, "order refresh failed");
                self.view.error(Section::Orders, &format!("Error al cargar órdenes: {error}"));
                false
            }
        };

        self.view.loaded(Section::Orders);
        outcome
    }

    fn render_orders(&mut self) {
        if self.session.orders().is_empty() {
            self.view.empty(Section::Orders);
            return;
        }

        let rows: Vec<OrderRow> = self
            .session
            .orders()
            .iter()
            .map(|order| {
                let costs = order.costs();
                let product = self
                    .session
                    .product(order.product_id)
                    .map(|product| product.display_name().to_string())
                    .unwrap_or_else(|| format!("Producto #{}", order.product_id));
                OrderRow {
                    id: order_id_label(order),
                    product,
                    quantity: order
                        .quantity
                        .map(|quantity| quantity.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    subtotal: format_money(costs.subtotal),
                    shipping: format_money(costs.shipping),
                    total: format_money(costs.total),
                    status: order.status_label().to_string(),
                }
            })
            .collect();

        self.view.orders(&rows);
    }
}

fn order_id_label(order: &Order) -> String {
    order.id.map(|id| format!("#{id}")).unwrap_or_else(|| "#?".to_string())
}
