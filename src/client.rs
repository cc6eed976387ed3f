//! Review API HTTP Client
//!
//! Native [`DashboardSource`] backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{AddProductResponse, DashboardData, NewProduct, Product, ProductList};
use crate::source::{
    dashboard_path, decode_response, join_url, DashboardSource, ADD_PRODUCT_FAILED,
    ADD_PRODUCT_PATH, DASHBOARD_FETCH_FAILED, PRODUCTS_FETCH_FAILED, PRODUCTS_PATH,
};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Server origin, e.g. "http://localhost:8000"
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Review API client
pub struct HttpSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpSource {
    /// Create a client with the given configuration
    pub fn new(config: HttpSourceConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| DashboardError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    async fn read(response: reqwest::Response) -> DashboardResult<(u16, String)> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport)?;
        Ok((status, body))
    }
}

fn map_transport(e: reqwest::Error) -> DashboardError {
    let detail = if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("service unavailable: {}", e)
    } else {
        e.to_string()
    };
    DashboardError::network(detail)
}

#[async_trait(?Send)]
impl DashboardSource for HttpSource {
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
        let url = self.url(PRODUCTS_PATH);
        tracing::debug!(%url, "fetching products");

        let response = self.client.get(&url).send().await.map_err(map_transport)?;
        let (status, body) = Self::read(response).await?;
        let list: ProductList = decode_response(status, &body, PRODUCTS_FETCH_FAILED)?;
        Ok(list.products)
    }

    async fn fetch_dashboard(&self, pid: &str) -> DashboardResult<DashboardData> {
        let url = self.url(&dashboard_path(pid));
        tracing::debug!(%url, "fetching dashboard data");

        let response = self.client.get(&url).send().await.map_err(map_transport)?;
        let (status, body) = Self::read(response).await?;
        decode_response(status, &body, DASHBOARD_FETCH_FAILED)
    }

    async fn add_product(&self, product: &NewProduct) -> DashboardResult<AddProductResponse> {
        let url = self.url(ADD_PRODUCT_PATH);
        tracing::info!(pid = %product.pid, "registering product");

        let response = self
            .client
            .post(&url)
            .json(product)
            .send()
            .await
            .map_err(map_transport)?;
        let (status, body) = Self::read(response).await?;
        decode_response(status, &body, ADD_PRODUCT_FAILED)
    }
}
