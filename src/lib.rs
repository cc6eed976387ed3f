//! # ReviewLens
//!
//! Product review sentiment dashboard. Fetches aggregate sentiment and
//! recent reviews for a product from the review API and shapes them for
//! display: three summary counters, two chart widgets and a reviews table.
//!
//! ## Modules
//!
//! - [`model`]: JSON types of the review API
//! - [`present`]: pure display shaping (percentages, stars, truncation, rows)
//! - [`chart`]: chart option documents and widget handle slots
//! - [`refresh`]: the dashboard refresh flow with stale-response protection
//! - [`products`]: product list bootstrap and selection
//! - [`theme`]: persisted light/dark preference
//! - [`source`]: the data source seam shared by native and browser clients
//! - `client`, `config`: native HTTP client and configuration (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reviewlens::{bootstrap, HttpSource, HttpSourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::new(HttpSourceConfig::default())?;
//!     let selection = bootstrap(&source).await;
//!
//!     if let Some(product) = selection.active() {
//!         println!("Selected {} ({})", product.name, product.pid);
//!     }
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod error;
pub mod model;
pub mod present;
pub mod products;
pub mod refresh;
pub mod source;
pub mod theme;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use chart::{ChartKind, ChartSeries, ChartSlots, ChartSpec, ChartSurface, AREA_CHART, DONUT_CHART};
pub use error::{DashboardError, DashboardResult};
pub use model::{
    AddProductResponse, DashboardData, NewProduct, Product, ProductList, Review, Sentiment,
    SentimentCount,
};
pub use present::{
    positive_percentage, render_review_table_html, star_indicator, truncate_text, ReviewRow,
    ReviewTable, SummaryStats,
};
pub use products::{bootstrap, load_products, ProductSelection};
pub use refresh::{
    DashboardFlow, DashboardView, RefreshOutcome, RefreshTicket, RequestSequencer, RequestToken,
};
pub use source::DashboardSource;
pub use theme::{preferred_theme, toggle_theme, Theme, ThemeStore, THEME_STORAGE_KEY};

#[cfg(feature = "native")]
pub use client::{HttpSource, HttpSourceConfig};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
