//! Reviews Table Component
//!
//! Review listing with status badges and approve/reject actions.

use leptos::*;
use leptos_router::*;
use reviewdesk::presentation::{EMPTY_MESSAGE, LOADING_MESSAGE};
use reviewdesk::{Notice, Review, ReviewAction, ReviewRow, ReviewUpdate};
use std::collections::HashSet;

use crate::api;
use crate::components::loading::{ReviewRowsSkeleton, TABLE_COLUMNS};
use crate::state::global::GlobalState;

/// Review table; `on_changed` fires after a successful status change
#[component]
pub fn ReviewsTable(
    #[prop(into)]
    reviews: Signal<Vec<Review>>,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    on_changed: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    // Ids with a status change in flight
    let pending = create_rw_signal(HashSet::<String>::new());

    let run = move |id: String, action: ReviewAction| {
        if pending.with_untracked(|p| p.contains(&id)) {
            return;
        }
        pending.update(|p| {
            p.insert(id.clone());
        });

        spawn_local(async move {
            let update = ReviewUpdate::status(action.status());
            let notice = match api::update_review(&id, &update).await {
                Ok(_) => Notice::success(action.success_message()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to update review {}: {}", id, e).into());
                    Notice::error(e.user_message())
                }
            };

            pending.update(|p| {
                p.remove(&id);
            });
            state.notify(&notice);
            if !notice.is_error() {
                on_changed.call(());
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            {move || error.get().map(|message| view! {
                <div class="px-4 py-3 text-red-400 text-sm border-b border-gray-700">{message}</div>
            })}

            <table class="w-full text-sm text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th class="px-4 py-3">"Guest"</th>
                        <th class="px-4 py-3">"Listing"</th>
                        <th class="px-4 py-3">"Channel"</th>
                        <th class="px-4 py-3">"Rating"</th>
                        <th class="px-4 py-3">"Review"</th>
                        <th class="px-4 py-3">"Date"</th>
                        <th class="px-4 py-3">"Status"</th>
                        <th class="px-4 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <tr class="sr-only">
                                    <td colspan=TABLE_COLUMNS>{LOADING_MESSAGE}</td>
                                </tr>
                                <ReviewRowsSkeleton rows=5 />
                            }
                            .into_view();
                        }

                        let reviews = reviews.get();
                        if reviews.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan=TABLE_COLUMNS class="px-4 py-12 text-center text-gray-400">
                                        {EMPTY_MESSAGE}
                                    </td>
                                </tr>
                            }
                            .into_view();
                        }

                        reviews
                            .into_iter()
                            .map(|review| view! { <ReviewTableRow review=review pending=pending run=run /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ReviewTableRow<F>(
    review: Review,
    pending: RwSignal<HashSet<String>>,
    run: F,
) -> impl IntoView
where
    F: Fn(String, ReviewAction) + Copy + 'static,
{
    let row = ReviewRow::from_review(&review);
    let id = row.id.clone();
    let busy = Signal::derive(move || pending.with(|p| p.contains(&id)));

    let actions = [ReviewAction::Approve, ReviewAction::Reject]
        .into_iter()
        .filter(|action| action.applies_to(&review.status))
        .map(|action| {
            let id = row.id.clone();
            let color = match action {
                ReviewAction::Approve => "bg-green-600 hover:bg-green-700",
                ReviewAction::Reject => "bg-red-600 hover:bg-red-700",
            };
            view! {
                <button
                    on:click=move |_| run(id.clone(), action)
                    disabled=move || busy.get()
                    class=format!(
                        "px-3 py-1 rounded text-xs font-medium text-white {} \
                         disabled:opacity-50 disabled:cursor-not-allowed transition-colors",
                        color
                    )
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    let listing = if review.property_id.is_empty() {
        view! { <span>{row.listing}</span> }.into_view()
    } else {
        let href = format!("/property/{}", review.property_id);
        view! { <A href=href class="text-primary-400 hover:underline">{row.listing}</A> }.into_view()
    };

    view! {
        <tr class="border-b border-gray-700 hover:bg-gray-750">
            <td class="px-4 py-3 font-medium">{row.guest}</td>
            <td class="px-4 py-3">{listing}</td>
            <td class="px-4 py-3 text-gray-300">{row.channel}</td>
            <td class="px-4 py-3 text-yellow-400" title=row.rating.to_string()>{row.stars}</td>
            <td class="px-4 py-3 text-gray-300" title=row.full_comment>{row.comment}</td>
            <td class="px-4 py-3 text-gray-400 whitespace-nowrap">{row.date}</td>
            <td class="px-4 py-3">
                <span class=row.badge.css_class()>{row.badge.label}</span>
            </td>
            <td class="px-4 py-3 space-x-2 whitespace-nowrap">{actions}</td>
        </tr>
    }
}
