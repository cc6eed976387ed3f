//! Page Components
//!
//! Top-level page views for routing.

pub mod dashboard;
pub mod home;

pub use dashboard::Dashboard;
pub use home::Home;
