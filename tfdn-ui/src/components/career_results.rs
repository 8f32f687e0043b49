//! Career Results Component
//!
//! Ranked recommendations with match score, skills, training and the
//! matched opportunity.

use leptos::*;

use crate::api::types::CareerRecommendation;
use crate::theme::use_theme;

#[component]
pub fn CareerResults(
    recommendations: Vec<CareerRecommendation>,
    #[prop(into)]
    on_restart: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <h2 class="text-3xl font-bold text-primary-900 text-center mb-4">
                "Your Career Recommendations"
            </h2>
            <div class="bg-blue-50 border border-blue-200 text-blue-800 rounded-lg p-4 mb-8">
                "Demo Mode: These recommendations are generated from a fixed scoring table over sample data. \
                 The full platform will use live job market data and personalized learning paths."
            </div>

            <div class="space-y-6">
                {recommendations.into_iter().map(|rec| view! {
                    <RecommendationCard rec=rec />
                }).collect_view()}
            </div>

            <div class="text-center mt-8">
                <button
                    on:click=move |_| on_restart.call(())
                    class="px-6 py-3 rounded-lg border border-primary-900 text-primary-900 hover:bg-primary-50"
                >
                    "Retake Assessment"
                </button>
            </div>
        </div>
    }
}

#[component]
fn RecommendationCard(rec: CareerRecommendation) -> impl IntoView {
    let color = use_theme().score_color(rec.score);
    let opportunity = rec.opportunity;

    view! {
        <div class="bg-white rounded-xl shadow-md p-6">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-2xl font-bold">{rec.role}</h3>
                    <p class="text-gray-600">{opportunity.description}</p>
                </div>
                <span
                    class="px-3 py-1 rounded-full text-white font-semibold whitespace-nowrap"
                    style=format!("background-color: {}", color)
                >
                    {format!("{}% Match", rec.score)}
                </span>
            </div>

            <div class="mb-4">
                <div class="text-sm text-gray-600 mb-1">"Compatibility"</div>
                <div class="w-full h-2 bg-gray-200 rounded-full">
                    <div
                        class="h-2 rounded-full"
                        style=format!("width: {}%; background-color: {}", rec.score, color)
                    />
                </div>
            </div>

            <h4 class="font-semibold mb-2">"Key Skills Required"</h4>
            <div class="flex flex-wrap gap-2 mb-4">
                {rec.skills.into_iter().map(|skill| view! {
                    <span class="px-2 py-1 text-xs rounded-full bg-primary-50 text-primary-900">{skill}</span>
                }).collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-2 text-sm text-gray-700 mb-4">
                <div>{format!("💰 {}", opportunity.salary)}</div>
                <div>{format!("📍 {}", opportunity.location)}</div>
            </div>

            {(!rec.training_links.is_empty()).then(|| view! {
                <h4 class="font-semibold mb-2">"Recommended Training"</h4>
                <div class="flex flex-wrap gap-2 mb-4">
                    {rec.training_links.into_iter().map(|module| view! {
                        <span class="px-2 py-1 text-xs rounded-full border border-secondary-600 text-secondary-700">
                            {module}
                        </span>
                    }).collect_view()}
                </div>
            })}

            <a
                href=opportunity.link
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block px-5 py-2 rounded-lg bg-secondary-600 text-white font-medium hover:bg-secondary-700"
            >
                "Apply for This Role"
            </a>
        </div>
    }
}
