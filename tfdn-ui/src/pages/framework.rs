//! Framework Page
//!
//! Strategic framework 2025-2030: timeline, the four pillars, projected
//! impact and the Vision 2030 statement.

use leptos::*;

use crate::api;
use crate::api::types::{ChartData, Pillar, TimelineEvent};
use crate::components::{CardSkeleton, ImpactChart, InteractiveTimeline, PillarCard};
use crate::state::log_load_error;

const FRAMEWORK_PDF: &str = "/documents/tfdn-strategic-framework-2025-2030.pdf";

#[component]
pub fn Framework() -> impl IntoView {
    let pillars = create_rw_signal(Vec::<Pillar>::new());
    let timeline = create_rw_signal(Vec::<TimelineEvent>::new());
    let chart = create_rw_signal(ChartData::default());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_pillars().await {
                Ok(data) => pillars.set(data),
                Err(e) => log_load_error("pillars", &e),
            }
            match api::fetch_timeline().await {
                Ok(data) => timeline.set(data),
                Err(e) => log_load_error("timeline", &e),
            }
            match api::fetch_chart().await {
                Ok(data) => chart.set(data),
                Err(e) => log_load_error("chart data", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-16">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-primary-900 mb-4">"Strategic Framework"</h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto mb-6">
                    "Our comprehensive roadmap for transformative impact across Africa (2025-2030)"
                </p>
                <a
                    href=FRAMEWORK_PDF
                    download
                    class="inline-block px-6 py-3 bg-primary-900 hover:bg-primary-800 text-white rounded-lg font-medium"
                >
                    "Download PDF"
                </a>
            </section>

            <section>
                {move || {
                    if loading.get() {
                        view! { <CardSkeleton count=1 /> }.into_view()
                    } else {
                        view! { <InteractiveTimeline timeline=timeline /> }.into_view()
                    }
                }}
            </section>

            <section>
                <h2 class="text-3xl font-bold text-primary-900 text-center mb-2">"Four Strategic Pillars"</h2>
                <p class="text-gray-600 text-center mb-8">
                    "Click on any pillar to explore detailed programs and initiatives"
                </p>
                {move || {
                    if loading.get() {
                        view! { <CardSkeleton count=4 /> }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                                {pillars.get().into_iter().map(|pillar| view! {
                                    <PillarCard pillar=pillar />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            <section class="bg-white rounded-xl shadow-md p-6">
                <h2 class="text-2xl font-bold text-primary-900 mb-4">"Projected Impact"</h2>
                <ImpactChart data=chart />
            </section>

            <section class="rounded-2xl bg-gradient-to-br from-primary-900 to-primary-500 text-white p-10 text-center">
                <h2 class="text-3xl font-bold mb-4">"Vision 2030"</h2>
                <p class="text-xl text-primary-100 mb-4">
                    "To be the leading network driving sustainable development and innovation across Africa"
                </p>
                <p class="text-primary-100 max-w-3xl mx-auto">
                    "By 2030, TFDN will have transformed the lives of over 100,000 individuals across 10+ \
                     African countries, establishing a sustainable ecosystem of education, career development, \
                     and social innovation that serves as a model for development organizations worldwide."
                </p>
            </section>
        </div>
    }
}
