//! Loading Component
//!
//! Spinners and skeletons shown while page content loads.

use leptos::*;

/// Full-section loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for card grids
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white rounded-xl shadow p-6">
                    <div class="h-4 bg-gray-200 rounded w-1/3 mb-4" />
                    <div class="h-6 bg-gray-200 rounded w-2/3 mb-2" />
                    <div class="h-4 bg-gray-200 rounded w-full" />
                </div>
            }).collect_view()}
        </div>
    }
}
