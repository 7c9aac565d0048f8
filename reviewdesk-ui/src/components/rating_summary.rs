//! Rating Summary Component
//!
//! Average rating and per-star breakdown for one property.

use leptos::*;
use reviewdesk::presentation::stars;
use reviewdesk::PropertyStats;

#[component]
pub fn RatingSummary(stats: PropertyStats) -> impl IntoView {
    let rows = stats.distribution_rows();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-baseline space-x-3 mb-4">
                <span class="text-4xl font-bold">{format!("{:.1}", stats.average_rating)}</span>
                <span class="text-yellow-400 text-lg">{stars(stats.average_rating)}</span>
                <span class="text-gray-400 text-sm">
                    {format!("{} reviews", stats.total_reviews)}
                </span>
            </div>

            <div class="space-y-2">
                {rows
                    .into_iter()
                    .map(|(star, count, percent)| view! {
                        <div class="flex items-center space-x-3 text-sm">
                            <span class="w-10 text-gray-300">{format!("{} ★", star)}</span>
                            <div class="flex-1 h-2 bg-gray-700 rounded-full">
                                <div
                                    class="h-2 rounded-full bg-yellow-400"
                                    style=format!("width: {:.1}%", percent)
                                />
                            </div>
                            <span class="w-8 text-right text-gray-400">{count}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
