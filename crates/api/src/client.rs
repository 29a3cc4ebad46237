use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use mostrador_core::{NewOrder, NewProduct, Order, Product};

use crate::error::ApiError;

const PRODUCTS_PATH: &str = "/v1/products";
const ORDERS_PATH: &str = "/v1/orders";

/// The store service surface the rest of the application programs against.
/// Production uses [`StoreClient`]; tests substitute scripted fakes.
#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Creates a product. The service may answer `201` with an empty body, so
    /// the echoed product is optional.
    async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ApiError>;

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError>;
}

/// Plain JSON-over-HTTP client for the store service.
#[derive(Clone, Debug)]
pub struct StoreClient {
    base_url: String,
    client: reqwest::Client,
}

impl StoreClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)).build()?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a collection endpoint. Read failures report only `HTTP <status>`;
    /// a non-array body is treated as an empty collection rather than an
    /// error, matching how the service serves pre-seed state.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response =
            self.client.get(self.url(path)).header(ACCEPT, "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        let value: Value =
            response.json().await.map_err(|error| ApiError::Decode(error.to_string()))?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item).map_err(|error| ApiError::Decode(error.to_string()))
                })
                .collect(),
            other => {
                warn!(path, body_kind = value_kind(&other), "expected a JSON array, coercing to empty");
                Ok(Vec::new())
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl StoreApi for StoreClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.fetch_list(PRODUCTS_PATH).await?;
        debug!(count = products.len(), "fetched product catalog");
        Ok(products)
    }

    #[instrument(skip_all, fields(name = %product.name))]
    async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ApiError> {
        let response = self
            .client
            .post(self.url(PRODUCTS_PATH))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(product)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|error| ApiError::Decode(error.to_string()))
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let orders = self.fetch_list(ORDERS_PATH).await?;
        debug!(count = orders.len(), "fetched order history");
        Ok(orders)
    }

    #[instrument(skip_all, fields(product_id = order.product_id, quantity = order.quantity))]
    async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let response = self
            .client
            .post(self.url(ORDERS_PATH))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))
    }
}
