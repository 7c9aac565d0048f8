//! Review Card Component
//!
//! A guest review as shown on the public property page.

use leptos::*;
use reviewdesk::presentation::{format_month, initials, stars};
use reviewdesk::Review;

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let guest = if review.guest_name.trim().is_empty() {
        "Guest".to_string()
    } else {
        review.guest_name.clone()
    };

    view! {
        <article class="bg-gray-800 rounded-xl p-5 border border-gray-700">
            <header class="flex items-center space-x-3 mb-3">
                <div class="w-10 h-10 rounded-full bg-primary-600 flex items-center justify-center font-bold">
                    {initials(&guest)}
                </div>
                <div class="flex-1">
                    <div class="font-medium">{guest}</div>
                    <div class="text-xs text-gray-400">
                        {format!("{} · {}", format_month(review.date), review.source.label())}
                    </div>
                </div>
                <span class="text-yellow-400">{stars(review.rating)}</span>
            </header>

            <p class="text-gray-300 leading-relaxed">{review.comment.clone()}</p>

            {review.response.clone().map(|response| view! {
                <div class="mt-4 pl-4 border-l-2 border-primary-500 text-sm text-gray-400">
                    <div class="font-medium text-gray-300 mb-1">"Response from host"</div>
                    <p>{response}</p>
                </div>
            })}
        </article>
    }
}
