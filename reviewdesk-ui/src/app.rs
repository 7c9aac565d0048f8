//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use reviewdesk::client::DEFAULT_API_BASE;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, PropertyPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/property/:id" view=PropertyPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing the backend in use, with an override form
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());
    let (testing, set_testing) = create_signal(false);

    let start_edit = move |_| {
        set_draft.set(state.api_base.get_untracked());
        set_editing.set(true);
    };

    let save = move |_| {
        state.set_api_base(&draft.get_untracked());
        set_editing.set(false);
        state.show_success("API URL saved");
    };

    let test_connection = move |_| {
        set_testing.set(true);
        spawn_local(async move {
            if api::check_connection().await {
                state.show_success("Connected to reviews service");
            } else {
                state.show_error("Cannot reach the reviews service");
            }
            set_testing.set(false);
        });
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                {move || {
                    if editing.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <input
                                    type="text"
                                    prop:value=move || draft.get()
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    placeholder=DEFAULT_API_BASE
                                    class="w-96 bg-gray-700 rounded-lg px-3 py-1
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <button
                                    on:click=save
                                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded-lg"
                                >
                                    "Save"
                                </button>
                                <button
                                    on:click=move |_| set_editing.set(false)
                                    class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded-lg"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="flex items-center space-x-2 text-gray-400">
                                <span>"API:"</span>
                                <span class="font-mono">{move || state.api_base.get()}</span>
                                <button on:click=start_edit class="text-primary-400 hover:underline">
                                    "Change"
                                </button>
                                <button
                                    on:click=test_connection
                                    disabled=move || testing.get()
                                    class="text-primary-400 hover:underline disabled:opacity-50"
                                >
                                    {move || if testing.get() { "Testing..." } else { "Test" }}
                                </button>
                            </div>
                        }
                        .into_view()
                    }
                }}

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Reviews"
            </A>
        </div>
    }
}
