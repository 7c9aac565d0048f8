//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod property;

pub use dashboard::Dashboard;
pub use property::PropertyPage;
