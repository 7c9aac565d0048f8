//! Stats Cards Component
//!
//! Dashboard counters derived from the loaded reviews.

use leptos::*;
use reviewdesk::presentation::stars;
use reviewdesk::ReviewSummary;

use crate::components::loading::StatCardSkeleton;

/// Row of summary cards
#[component]
pub fn StatsCards(
    #[prop(into)]
    summary: Signal<ReviewSummary>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                if loading.get() {
                    (0..4).map(|_| view! { <StatCardSkeleton /> }).collect_view()
                } else {
                    let summary = summary.get();
                    view! {
                        <StatCard
                            label="Total Reviews"
                            value=summary.total_reviews.to_string()
                        />
                        <StatCard
                            label="Average Rating"
                            value=format!("{:.1}", summary.average_rating)
                            detail=stars(summary.average_rating)
                        />
                        <StatCard
                            label="Pending"
                            value=summary.status_counts.pending.to_string()
                            accent="text-yellow-400"
                        />
                        <StatCard
                            label="Approved"
                            value=summary.status_counts.approved.to_string()
                            accent="text-green-400"
                        />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: String,
    #[prop(optional, into)]
    detail: Option<String>,
    #[prop(default = "text-white")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=format!("text-3xl font-bold mt-2 {}", accent)>{value}</div>
            {detail.map(|d| view! { <div class="mt-2 text-yellow-400 text-sm">{d}</div> })}
        </div>
    }
}
