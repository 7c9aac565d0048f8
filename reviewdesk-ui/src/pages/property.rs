//! Property Page
//!
//! Guest-facing page for one property: details, rating summary and approved
//! reviews. The three fetches run independently and each fills its own slot.

use leptos::*;
use leptos_router::*;
use reviewdesk::{PropertyDetail, PropertyPage as Page, PropertyView};

use crate::api;
use crate::components::loading::{PropertyHeaderSkeleton, ReviewCardsSkeleton};
use crate::components::{RatingSummary, ReviewCard};

/// Property page component
#[component]
pub fn PropertyPage() -> impl IntoView {
    let params = use_params_map();
    let property_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let detail = create_rw_signal(PropertyDetail::new(String::new()));

    create_effect(move |_| {
        let id = property_id();
        detail.set(PropertyDetail::new(id.clone()));

        // Results for a page we already left are dropped
        let current = move |id: &str| detail.with_untracked(|d| d.id == id);

        let property_for = id.clone();
        spawn_local(async move {
            let result = api::fetch_property(&property_for).await;
            if current(&property_for) {
                detail.update(|d| d.set_property(result));
            }
        });

        let reviews_for = id.clone();
        spawn_local(async move {
            let result = api::fetch_property_reviews(&reviews_for).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch property reviews: {}", e).into());
            }
            if current(&reviews_for) {
                detail.update(|d| d.set_reviews(result));
            }
        });

        spawn_local(async move {
            let result = api::fetch_property_stats(&id).await;
            if current(&id) {
                detail.update(|d| d.set_stats(result));
            }
        });
    });

    view! {
        <div class="space-y-8">
            {move || match detail.with(PropertyDetail::view) {
                PropertyView::Loading => view! { <PendingPage detail=detail /> }.into_view(),
                PropertyView::NotFound => view! { <PropertyNotFound /> }.into_view(),
                PropertyView::Failed(message) => view! {
                    <div class="bg-gray-800 rounded-xl p-6 text-red-400">{message}</div>
                }
                .into_view(),
                PropertyView::Ready(page) => view! { <LoadedPage page=page /> }.into_view(),
            }}
        </div>
    }
}

/// Shown until every slot has resolved
#[component]
fn PendingPage(detail: RwSignal<PropertyDetail>) -> impl IntoView {
    view! {
        {move || detail.with(|d| match &d.property.value {
            Some(property) => view! {
                <h1 class="text-3xl font-bold">{property.name.clone()}</h1>
            }
            .into_view(),
            None if d.property.loading => view! { <PropertyHeaderSkeleton /> }.into_view(),
            None => view! {}.into_view(),
        })}
        {move || {
            if detail.with(|d| d.reviews.loading || d.stats.loading) {
                view! { <ReviewCardsSkeleton count=3 /> }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

#[component]
fn LoadedPage(page: Page) -> impl IntoView {
    let Page {
        property,
        reviews,
        stats,
        location,
        description,
    } = page;

    view! {
        <header class="space-y-2">
            <A href="/" class="text-sm text-gray-400 hover:text-white">"← All reviews"</A>
            <h1 class="text-3xl font-bold">{property.name.clone()}</h1>
            {(!location.is_empty()).then(|| view! { <p class="text-gray-400">{location}</p> })}
        </header>

        {property.image_url.clone().map(|src| view! {
            <img src=src alt=property.name.clone() class="w-full max-h-96 object-cover rounded-xl" />
        })}

        <div class="grid md:grid-cols-3 gap-8">
            <section class="md:col-span-2 space-y-6">
                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-3">"About this property"</h2>
                    <p class="text-gray-300 leading-relaxed">{description}</p>
                </div>

                <div class="space-y-4">
                    <h2 class="text-xl font-semibold">"Guest Reviews"</h2>
                    {if reviews.is_empty() {
                        view! { <p class="text-gray-400">"No reviews yet."</p> }.into_view()
                    } else {
                        reviews
                            .into_iter()
                            .map(|review| view! { <ReviewCard review=review /> })
                            .collect_view()
                    }}
                </div>
            </section>

            <aside>
                <RatingSummary stats=stats />
            </aside>
        </div>
    }
}

#[component]
fn PropertyNotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🏠"</div>
            <h1 class="text-3xl font-bold mb-2">"Property Not Found"</h1>
            <p class="text-gray-400 mb-6">"This property doesn't exist or is no longer listed."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Reviews"
            </A>
        </div>
    }
}
