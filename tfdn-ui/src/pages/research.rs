//! Research Page
//!
//! Latest reports (newest first, as the API serves them) and the research approach.

use leptos::*;

use crate::api;
use crate::api::types::ResearchReport;
use crate::components::CardSkeleton;
use crate::state::log_load_error;
use crate::theme::format_report_date;

#[component]
pub fn Research() -> impl IntoView {
    let reports = create_rw_signal(Vec::<ResearchReport>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_research_reports().await {
                Ok(data) => reports.set(data),
                Err(e) => log_load_error("research reports", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-12">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-primary-900 mb-4">"Research & Innovation"</h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                    "Data-driven insights and evidence-based research that inform our programs and measure our impact."
                </p>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-primary-900 mb-6">"Latest Research Reports"</h2>
                {move || {
                    if loading.get() {
                        view! { <CardSkeleton count=4 /> }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-6">
                                {reports.get().into_iter().map(|report| view! {
                                    <ReportCard report=report />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            <section class="rounded-2xl bg-primary-900 text-white p-8">
                <h2 class="text-2xl font-bold text-center mb-8">"Our Research Approach"</h2>
                <div class="grid md:grid-cols-3 gap-6 text-center">
                    <div>
                        <div class="text-4xl mb-2">"🔬"</div>
                        <h3 class="font-semibold mb-2">"Data Collection"</h3>
                        <p class="text-sm text-primary-100">
                            "Mixed-methods approach combining quantitative surveys, qualitative interviews, and participatory research."
                        </p>
                    </div>
                    <div>
                        <div class="text-4xl mb-2">"📊"</div>
                        <h3 class="font-semibold mb-2">"AI Analytics"</h3>
                        <p class="text-sm text-primary-100">
                            "Advanced machine learning for pattern recognition, predictive modeling, and impact assessment."
                        </p>
                    </div>
                    <div>
                        <div class="text-4xl mb-2">"📋"</div>
                        <h3 class="font-semibold mb-2">"Evidence-Based"</h3>
                        <p class="text-sm text-primary-100">
                            "Program decisions backed by rigorous research and continuous monitoring and evaluation frameworks."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ReportCard(report: ResearchReport) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow p-6 flex flex-col">
            <div class="flex items-center justify-between mb-3">
                <span class="px-2 py-1 text-xs rounded-full border border-primary-900 text-primary-900">
                    {report.kind}
                </span>
                <span class="text-sm text-gray-500">{format_report_date(&report.date)}</span>
            </div>
            <h3 class="text-xl font-semibold mb-2">{report.title}</h3>
            <p class="text-gray-600 flex-1 mb-4">{report.description}</p>
            <button class="w-full py-2 rounded-lg bg-primary-900 hover:bg-primary-800 text-white font-medium">
                "Download Report"
            </button>
        </div>
    }
}
