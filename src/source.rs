//! Data Source Seam
//!
//! The review API as seen by the dashboard, plus the wire helpers both the
//! native and the browser client share.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{AddProductResponse, DashboardData, NewProduct, Product};

/// Product list endpoint
pub const PRODUCTS_PATH: &str = "/api/products/";

/// Product registration endpoint
pub const ADD_PRODUCT_PATH: &str = "/api/add-product/";

/// Fallback detail when a dashboard response carries no `error` field
pub const DASHBOARD_FETCH_FAILED: &str = "Failed to load dashboard data";

/// Fallback detail when the product list cannot be loaded
pub const PRODUCTS_FETCH_FAILED: &str = "Failed to fetch products";

/// Fallback detail when a product cannot be added
pub const ADD_PRODUCT_FAILED: &str = "Failed to add product";

/// Dashboard endpoint for one product
pub fn dashboard_path(pid: &str) -> String {
    format!("/api/dashboard-data/{}/", urlencoding::encode(pid))
}

/// Join a base URL and an absolute API path
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Where the dashboard gets its data from
#[async_trait(?Send)]
pub trait DashboardSource {
    /// All products available for selection, in server order
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>>;

    /// Aggregates and recent reviews for one product
    async fn fetch_dashboard(&self, pid: &str) -> DashboardResult<DashboardData>;

    /// Register a product; the backend scrapes and analyzes its reviews
    async fn add_product(&self, product: &NewProduct) -> DashboardResult<AddProductResponse>;
}

/// Turn a raw HTTP response into a typed value.
///
/// The body is read as JSON before the status is looked at, so an error
/// response can contribute its `error` field to the failure detail.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> DashboardResult<T> {
    let success = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if success => return Err(DashboardError::MalformedData(e.to_string())),
        Err(_) => {
            return Err(DashboardError::Fetch {
                status: Some(status),
                detail: fallback.to_string(),
            })
        }
    };

    if !success {
        let detail = value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(fallback)
            .to_string();
        return Err(DashboardError::Fetch {
            status: Some(status),
            detail,
        });
    }

    serde_json::from_value(value).map_err(|e| DashboardError::MalformedData(e.to_string()))
}
