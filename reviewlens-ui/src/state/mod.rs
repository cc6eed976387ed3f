//! State Management
//!
//! Global application state, theme persistence and small widget state
//! machines.

pub mod global;
pub mod theme;
pub mod widgets;

pub use global::{provide_global_state, GlobalState};
pub use widgets::{Carousel, NavMenu};
