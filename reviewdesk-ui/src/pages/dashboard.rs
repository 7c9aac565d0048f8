//! Dashboard Page
//!
//! Review moderation view: counters, analytics, filters and the review table.

use leptos::*;
use reviewdesk::{Analytics, ClientResult, ReviewQuery, ReviewSummary, SortField};

use crate::api;
use crate::components::{AnalyticsCharts, FiltersPanel, ReviewsTable, StatsCards};
use crate::state::global::GlobalState;
use crate::state::reviews::use_reviews;

/// Server analytics when they arrived and carry data, else the local summary
fn choose_analytics(server: Option<&ClientResult<Analytics>>, local: &ReviewSummary) -> Analytics {
    match server {
        Some(Ok(analytics)) if !analytics.is_empty() => analytics.clone(),
        _ => local.analytics(),
    }
}

fn with_sort(query: &ReviewQuery, field: Option<SortField>, descending: bool) -> ReviewQuery {
    let mut query = query.clone();
    query.sort_by = field;
    query.sort_desc = field.map(|_| descending);
    query
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let reviews = use_reviews(ReviewQuery::default());

    let summary = create_memo(move |_| reviews.summary());
    create_effect(move |_| {
        let pending = summary.with(|s| s.status_counts.pending);
        state.pending_reviews.set(pending);
    });

    let server_analytics = create_local_resource(
        move || state.api_base.get(),
        |_| async move {
            let result = api::fetch_analytics().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch analytics: {}", e).into());
            }
            result
        },
    );
    let analytics = Signal::derive(move || {
        summary.with(|local| choose_analytics(server_analytics.get().as_ref(), local))
    });

    let refresh = move || {
        reviews.refetch();
        server_analytics.refetch();
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Reviews"</h1>
                    <p class="text-gray-400 mt-1">"Moderate guest reviews across your properties"</p>
                </div>

                <button
                    on:click=move |_| refresh()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <section>
                <StatsCards
                    summary=summary
                    loading=Signal::derive(move || reviews.loading())
                />
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">"Analytics"</h2>
                <AnalyticsCharts analytics=analytics />
            </section>

            <section class="space-y-4">
                <FiltersPanel on_change=move |filters: ReviewQuery| reviews.apply_filters(filters) />
                <SortControls
                    query=reviews.query.read_only()
                    on_change=move |query: ReviewQuery| reviews.set_query(query)
                />
                <ReviewsTable
                    reviews=Signal::derive(move || reviews.reviews())
                    loading=Signal::derive(move || reviews.loading())
                    error=Signal::derive(move || reviews.error())
                    on_changed=move |_: ()| refresh()
                />
            </section>
        </div>
    }
}

#[component]
fn SortControls(
    query: ReadSignal<ReviewQuery>,
    #[prop(into)]
    on_change: Callback<ReviewQuery>,
) -> impl IntoView {
    let field = move || query.with(|q| q.sort_by);
    let descending = move || query.with(|q| q.sort_desc.unwrap_or(true));

    view! {
        <div class="flex items-center justify-end space-x-2 text-sm">
            <label class="text-gray-400">"Sort by"</label>
            <select
                prop:value=move || field().map_or("none", |f| f.as_str())
                on:change=move |ev| {
                    let chosen = event_target_value(&ev).parse::<SortField>().ok();
                    on_change.call(query.with_untracked(|q| with_sort(q, chosen, descending())));
                }
                class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600"
            >
                <option value="none">"Default"</option>
                <option value="date">"Date"</option>
                <option value="rating">"Rating"</option>
                <option value="property">"Property"</option>
            </select>
            <button
                disabled=move || field().is_none()
                on:click=move |_| {
                    on_change.call(query.with_untracked(|q| with_sort(q, q.sort_by, !descending())));
                }
                class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded-lg"
            >
                {move || if descending() { "↓ Desc" } else { "↑ Asc" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewdesk::{ClientError, Review};

    #[test]
    fn test_choose_analytics_falls_back_to_local() {
        let local = ReviewSummary::from_reviews(&[Review::new("r1", 5.0), Review::new("r2", 3.0)]);

        let failed: ClientResult<Analytics> = Err(ClientError::network("offline"));
        assert_eq!(choose_analytics(Some(&failed), &local), local.analytics());

        let empty: ClientResult<Analytics> = Ok(Analytics::default());
        assert_eq!(choose_analytics(Some(&empty), &local), local.analytics());
        assert_eq!(choose_analytics(None, &local), local.analytics());
    }

    #[test]
    fn test_choose_analytics_prefers_server() {
        let local = ReviewSummary::default();
        let server = Analytics {
            sentiment: vec![reviewdesk::SentimentShare {
                label: "Positive".into(),
                value: 100.0,
            }],
            ..Analytics::default()
        };
        assert_eq!(choose_analytics(Some(&Ok(server.clone())), &local), server);
    }

    #[test]
    fn test_with_sort() {
        let query = ReviewQuery::new().min_rating(4);

        let sorted = with_sort(&query, Some(SortField::Rating), false);
        assert_eq!(sorted.sort_by, Some(SortField::Rating));
        assert_eq!(sorted.sort_desc, Some(false));
        assert_eq!(sorted.min_rating, Some(4));

        let cleared = with_sort(&sorted, None, true);
        assert_eq!(cleared.sort_by, None);
        assert_eq!(cleared.sort_desc, None);
    }
}
