//! UI Components
//!
//! Reusable Leptos components for the dashboard and the property page.

pub mod analytics_charts;
pub mod filters_panel;
pub mod loading;
pub mod nav;
pub mod rating_summary;
pub mod review_card;
pub mod reviews_table;
pub mod stats_cards;
pub mod toast;

pub use analytics_charts::AnalyticsCharts;
pub use filters_panel::FiltersPanel;
pub use nav::Nav;
pub use rating_summary::RatingSummary;
pub use review_card::ReviewCard;
pub use reviews_table::ReviewsTable;
pub use stats_cards::StatsCards;
pub use toast::Toast;
