//! State Management
//!
//! Global application state and the review collection used by the dashboard.

pub mod global;
pub mod reviews;

pub use global::{provide_global_state, GlobalState};
pub use reviews::{use_reviews, ReviewsState};
