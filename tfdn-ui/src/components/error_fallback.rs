//! Error Fallback Component
//!
//! Shown by the top-level error boundary when a page fails to render.

use leptos::*;

#[component]
pub fn ErrorFallback(errors: RwSignal<Errors>) -> impl IntoView {
    let on_reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    // Clearing the errors re-renders the children
    let on_retry = move |_| errors.update(|e| *e = Errors::default());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"⚠"</div>
            <h1 class="text-3xl font-bold mb-2">"Oops! Something went wrong"</h1>
            <p class="text-gray-600 mb-6">
                "We're sorry, but something unexpected happened. Please try refreshing the page."
            </p>
            <ul class="text-sm text-gray-500 mb-6">
                {move || errors.get()
                    .into_iter()
                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                    .collect_view()}
            </ul>
            <div class="flex space-x-3">
                <button
                    on:click=on_reload
                    class="px-6 py-3 bg-primary-900 hover:bg-primary-800 text-white rounded-lg font-medium"
                >
                    "Refresh Page"
                </button>
                <button
                    on:click=on_retry
                    class="px-6 py-3 border border-primary-900 text-primary-900 rounded-lg font-medium"
                >
                    "Try Again"
                </button>
            </div>
        </div>
    }
}
