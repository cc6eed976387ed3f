//! Product List Bootstrap
//!
//! The sidebar is filled once per page load. The first product is selected
//! automatically; selecting another one deselects the rest.

use crate::error::DashboardResult;
use crate::model::Product;
use crate::source::DashboardSource;

/// Products shown in the sidebar and which one is active
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSelection {
    products: Vec<Product>,
    active: Option<String>,
}

impl ProductSelection {
    /// Build a selection with the first product active
    pub fn from_products(products: Vec<Product>) -> Self {
        let active = products.first().map(|p| p.pid.clone());
        if active.is_none() {
            tracing::warn!("No products found.");
        }
        Self { products, active }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The product currently selected
    pub fn active(&self) -> Option<&Product> {
        let pid = self.active.as_deref()?;
        self.products.iter().find(|p| p.pid == pid)
    }

    pub fn is_active(&self, pid: &str) -> bool {
        self.active.as_deref() == Some(pid)
    }

    /// Mark `pid` as the only active product. Unknown ids change nothing.
    pub fn select(&mut self, pid: &str) -> bool {
        if !self.products.iter().any(|p| p.pid == pid) {
            tracing::warn!(pid, "ignoring selection of unknown product");
            return false;
        }
        self.active = Some(pid.to_string());
        true
    }

    /// Append a newly registered product and select it
    pub fn push_and_select(&mut self, product: Product) {
        let pid = product.pid.clone();
        if !self.products.iter().any(|p| p.pid == pid) {
            self.products.push(product);
        }
        self.active = Some(pid);
    }
}

/// Fetch the product list and select the first entry
pub async fn load_products<S>(source: &S) -> DashboardResult<ProductSelection>
where
    S: DashboardSource + ?Sized,
{
    let products = source.fetch_products().await?;
    tracing::info!(count = products.len(), "product list loaded");
    Ok(ProductSelection::from_products(products))
}

/// Fetch the product list once. Failures are logged and give an empty list.
pub async fn bootstrap<S>(source: &S) -> ProductSelection
where
    S: DashboardSource + ?Sized,
{
    match load_products(source).await {
        Ok(selection) => selection,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products");
            ProductSelection::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::model::{AddProductResponse, DashboardData, NewProduct};
    use async_trait::async_trait;

    fn product(pid: &str, name: &str) -> Product {
        Product {
            pid: pid.to_string(),
            name: name.to_string(),
        }
    }

    struct ListSource(DashboardResult<Vec<Product>>);

    #[async_trait(?Send)]
    impl DashboardSource for ListSource {
        async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
            self.0.clone()
        }

        async fn fetch_dashboard(&self, _pid: &str) -> DashboardResult<DashboardData> {
            Err(DashboardError::network("unused"))
        }

        async fn add_product(&self, _product: &NewProduct) -> DashboardResult<AddProductResponse> {
            Err(DashboardError::network("unused"))
        }
    }

    #[test]
    fn test_first_product_auto_selected() {
        let selection = ProductSelection::from_products(vec![
            product("P1", "Phone"),
            product("P2", "Laptop"),
        ]);
        assert!(selection.is_active("P1"));
        assert_eq!(selection.active().map(|p| p.name.as_str()), Some("Phone"));
    }

    #[test]
    fn test_select_deselects_others() {
        let mut selection = ProductSelection::from_products(vec![
            product("P1", "Phone"),
            product("P2", "Laptop"),
        ]);
        assert!(selection.select("P2"));
        assert!(selection.is_active("P2"));
        assert!(!selection.is_active("P1"));
    }

    #[test]
    fn test_select_unknown_rejected() {
        let mut selection = ProductSelection::from_products(vec![product("P1", "Phone")]);
        assert!(!selection.select("nope"));
        assert!(selection.is_active("P1"));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let selection = ProductSelection::from_products(vec![]);
        assert!(selection.is_empty());
        assert!(selection.active().is_none());
    }

    #[test]
    fn test_push_and_select() {
        let mut selection = ProductSelection::from_products(vec![product("P1", "Phone")]);
        selection.push_and_select(product("P9", "Tablet"));
        selection.push_and_select(product("P9", "Tablet"));
        assert_eq!(selection.products().len(), 2);
        assert!(selection.is_active("P9"));
    }

    #[tokio::test]
    async fn test_bootstrap_failure_is_empty() {
        let source = ListSource(Err(DashboardError::network("refused")));
        let selection = bootstrap(&source).await;
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn test_load_products_reports_failure() {
        let source = ListSource(Err(DashboardError::Fetch {
            status: Some(500),
            detail: "Internal Server Error".to_string(),
        }));
        let err = load_products(&source).await.unwrap_err();
        assert_eq!(err.to_string(), "Fetch error (500): Internal Server Error");

        let empty = load_products(&ListSource(Ok(vec![]))).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_keeps_server_order() {
        let source = ListSource(Ok(vec![product("B", "Second"), product("A", "First")]));
        let selection = bootstrap(&source).await;
        assert_eq!(selection.products()[0].pid, "B");
        assert!(selection.is_active("B"));
    }
}
