//! Review Collection
//!
//! The dashboard's review listing: current query, fetched reviews, loading
//! flag and last error. The list is fetched on mount and again whenever the
//! query or the backend URL changes by value.

use leptos::*;
use reviewdesk::{ClientResult, Review, ReviewQuery, ReviewSummary};

use crate::api;
use crate::state::global::GlobalState;

type Fetched = ClientResult<Vec<Review>>;

/// Handle to the dashboard's review collection
#[derive(Clone, Copy)]
pub struct ReviewsState {
    pub query: RwSignal<ReviewQuery>,
    resource: Resource<(ReviewQuery, String), Fetched>,
}

/// Create the review collection for the current component tree
pub fn use_reviews(initial: ReviewQuery) -> ReviewsState {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = create_rw_signal(initial);
    let api_base = state.api_base;

    let resource = create_local_resource(
        move || (query.get(), api_base.get()),
        |(query, _)| async move {
            let result = api::fetch_reviews(&query).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch reviews: {}", e).into());
            }
            result
        },
    );

    let loading = resource.loading();
    create_effect(move |_| state.loading.set(loading.get()));

    ReviewsState { query, resource }
}

/// Reviews to display; failures degrade to an empty list
pub fn reviews_or_empty(fetched: Option<&Fetched>) -> Vec<Review> {
    match fetched {
        Some(Ok(reviews)) => reviews.clone(),
        _ => Vec::new(),
    }
}

pub fn error_message(fetched: Option<&Fetched>) -> Option<String> {
    match fetched {
        Some(Err(e)) => Some(e.user_message()),
        _ => None,
    }
}

impl ReviewsState {
    pub fn reviews(&self) -> Vec<Review> {
        reviews_or_empty(self.resource.get().as_ref())
    }

    pub fn loading(&self) -> bool {
        self.resource.loading().get()
    }

    pub fn error(&self) -> Option<String> {
        error_message(self.resource.get().as_ref())
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::from_reviews(&self.reviews())
    }

    /// Replace the query; an equal query leaves the list alone
    pub fn set_query(&self, query: ReviewQuery) {
        if self.query.with_untracked(|current| *current != query) {
            self.query.set(query);
        }
    }

    /// Merge committed filter values into the current query
    pub fn apply_filters(&self, filters: ReviewQuery) {
        let merged = self.query.with_untracked(|current| current.with_filters(&filters));
        self.set_query(merged);
    }

    pub fn refetch(&self) {
        self.resource.refetch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewdesk::ClientError;

    #[test]
    fn test_failures_degrade_to_empty() {
        let failed: Fetched = Err(ClientError::from_response(500, "Internal Server Error", ""));
        assert!(reviews_or_empty(Some(&failed)).is_empty());
        assert_eq!(error_message(Some(&failed)).as_deref(), Some("API Error: Internal Server Error"));

        assert!(reviews_or_empty(None).is_empty());
        assert_eq!(error_message(None), None);
    }

    #[test]
    fn test_loaded_reviews_pass_through() {
        let loaded: Fetched = Ok(vec![Review::new("r1", 5.0), Review::new("r2", 3.0)]);
        assert_eq!(reviews_or_empty(Some(&loaded)).len(), 2);
        assert_eq!(error_message(Some(&loaded)), None);
    }
}
