//! Filters Panel Component
//!
//! Search box and select menus. Edits stay in the panel until Apply, Enter
//! in the search box, or Reset.

use leptos::*;
use reviewdesk::filters::{FilterField, FilterPanel, ALL, MIN_RATING_OPTIONS};
use reviewdesk::{FilterDraft, ReviewQuery, ReviewSource, ReviewStatus};

/// Filter controls; `on_change` receives the committed filters
#[component]
pub fn FiltersPanel(
    #[prop(into)]
    on_change: Callback<ReviewQuery>,
) -> impl IntoView {
    let panel = store_value(FilterPanel::new(move |query| on_change.call(query)));
    let draft = create_rw_signal(FilterDraft::default());

    // Runs an edit against the panel and mirrors its draft for rendering
    let edit = move |f: &mut dyn FnMut(&mut FilterPanel)| {
        panel.update_value(|p| f(p));
        draft.set(panel.with_value(|p| p.draft().clone()));
    };

    let select = move |field: FilterField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            edit(&mut |p: &mut FilterPanel| p.select(field, &value));
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 grid md:grid-cols-5 gap-3 items-end">
            <div class="md:col-span-2">
                <label class="block text-sm text-gray-400 mb-2">"Search"</label>
                <input
                    type="text"
                    placeholder="Guest, listing or comment"
                    prop:value=move || draft.with(|d| d.search.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        edit(&mut |p: &mut FilterPanel| p.set_search(text.clone()));
                    }
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        let key = ev.key();
                        edit(&mut |p: &mut FilterPanel| {
                            p.key_pressed(&key);
                        });
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <FilterSelect
                label="Source"
                value=Signal::derive(move || draft.with(|d| d.source_value().to_string()))
                on_change=select(FilterField::Source)
                options=ReviewSource::ALL
                    .iter()
                    .map(|s| (s.as_str().to_string(), s.label().to_string()))
                    .collect()
                all_label="All Sources"
            />

            <FilterSelect
                label="Status"
                value=Signal::derive(move || draft.with(|d| d.status_value().to_string()))
                on_change=select(FilterField::Status)
                options=ReviewStatus::ALL
                    .iter()
                    .map(|s| (s.as_str().to_string(), s.label().to_string()))
                    .collect()
                all_label="All Statuses"
            />

            <FilterSelect
                label="Rating"
                value=Signal::derive(move || draft.with(FilterDraft::min_rating_value))
                on_change=select(FilterField::MinRating)
                options=MIN_RATING_OPTIONS
                    .iter()
                    .map(|(value, label)| (value.to_string(), label.to_string()))
                    .collect()
                all_label="All Ratings"
            />

            <div class="md:col-span-5 flex justify-end space-x-2">
                <button
                    on:click=move |_| edit(&mut |p: &mut FilterPanel| {
                        p.reset();
                    })
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Reset"
                </button>
                <button
                    on:click=move |_| edit(&mut |p: &mut FilterPanel| {
                        p.apply();
                    })
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Apply Filters"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FilterSelect<F>(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: F,
    options: Vec<(String, String)>,
    all_label: &'static str,
) -> impl IntoView
where
    F: Fn(ev::Event) + 'static,
{
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=on_change
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value=ALL>{all_label}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
