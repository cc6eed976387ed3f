//! HTTP API Client
//!
//! [`DashboardSource`] over `gloo-net` for the review API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use reviewlens::model::{AddProductResponse, DashboardData, NewProduct, Product, ProductList};
use reviewlens::source::{
    dashboard_path, decode_response, join_url, DashboardSource, ADD_PRODUCT_FAILED,
    ADD_PRODUCT_PATH, DASHBOARD_FETCH_FAILED, PRODUCTS_FETCH_FAILED, PRODUCTS_PATH,
};
use reviewlens::{DashboardError, DashboardResult};

/// Default API base URL (same origin as the page)
pub const DEFAULT_API_BASE: &str = "";

/// localStorage key of the API base override
const API_BASE_KEY: &str = "reviewlens_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Review API reached through `fetch`
#[derive(Debug, Clone)]
pub struct GlooSource {
    base: String,
}

impl Default for GlooSource {
    fn default() -> Self {
        Self::new(get_api_base())
    }
}

impl GlooSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }
}

fn network_error(e: gloo_net::Error) -> DashboardError {
    DashboardError::network(format!("Network error: {}", e))
}

async fn read(response: Response) -> DashboardResult<(u16, String)> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl DashboardSource for GlooSource {
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
        let response = Request::get(&self.url(PRODUCTS_PATH))
            .send()
            .await
            .map_err(network_error)?;

        let (status, body) = read(response).await?;
        let list: ProductList = decode_response(status, &body, PRODUCTS_FETCH_FAILED)?;
        Ok(list.products)
    }

    async fn fetch_dashboard(&self, pid: &str) -> DashboardResult<DashboardData> {
        let response = Request::get(&self.url(&dashboard_path(pid)))
            .send()
            .await
            .map_err(network_error)?;

        let (status, body) = read(response).await?;
        decode_response(status, &body, DASHBOARD_FETCH_FAILED)
    }

    async fn add_product(&self, product: &NewProduct) -> DashboardResult<AddProductResponse> {
        let response = Request::post(&self.url(ADD_PRODUCT_PATH))
            .json(product)
            .map_err(|e| DashboardError::network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        let (status, body) = read(response).await?;
        decode_response(status, &body, ADD_PRODUCT_FAILED)
    }
}
