//! UI Components
//!
//! Reusable Leptos components for the home page and dashboard.

pub mod add_product;
pub mod carousel;
pub mod chart;
pub mod nav;
pub mod product_list;
pub mod reviews_table;
pub mod stats_cards;
pub mod theme_toggle;

pub use add_product::AddProduct;
pub use carousel::Carousel;
pub use chart::ChartPanel;
pub use nav::Nav;
pub use product_list::ProductList;
pub use reviews_table::ReviewsTable;
pub use stats_cards::StatsCards;
pub use theme_toggle::ThemeToggle;
