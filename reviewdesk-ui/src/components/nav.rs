//! Navigation Component
//!
//! Header bar with the brand, the moderation link and a count of reviews
//! still waiting for a decision.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Badge text for the moderation queue; hidden when nothing is waiting
fn queue_badge(pending: usize) -> Option<String> {
    match pending {
        0 => None,
        1..=99 => Some(pending.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let on_property = move || location.pathname.with(|path| path.starts_with("/property/"));

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"⭐"</span>
                        <span class="text-xl font-bold text-white">"ReviewDesk"</span>
                    </A>

                    <div class="flex items-center space-x-3">
                        <Show when=on_property>
                            <span class="text-sm text-gray-400">"Guest view"</span>
                        </Show>
                        <A
                            href="/"
                            exact=true
                            class="flex items-center px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                            active_class="bg-gray-700 text-white"
                        >
                            "Moderation"
                            {move || queue_badge(state.pending_reviews.get()).map(|count| view! {
                                <span
                                    class="ml-2 px-2 py-0.5 rounded-full bg-yellow-500 text-gray-900 text-xs font-semibold"
                                    title="Reviews awaiting approval"
                                >
                                    {count}
                                </span>
                            })}
                        </A>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_badge() {
        assert_eq!(queue_badge(0), None);
        assert_eq!(queue_badge(7).as_deref(), Some("7"));
        assert_eq!(queue_badge(99).as_deref(), Some("99"));
        assert_eq!(queue_badge(250).as_deref(), Some("99+"));
    }
}
