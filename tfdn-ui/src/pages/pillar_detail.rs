//! Pillar Detail Page
//!
//! One pillar with its programs, addressed as `/pillars/:id`.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::Pillar;
use crate::components::Loading;
use crate::state::log_load_error;
use crate::theme::pillar_color;

#[derive(Params, PartialEq, Clone)]
struct PillarParams {
    id: Option<String>,
}

#[component]
pub fn PillarDetail() -> impl IntoView {
    let params = use_params::<PillarParams>();
    let pillar = create_rw_signal(None::<Pillar>);
    let (loading, set_loading) = create_signal(true);

    // Refetch when navigating between pillars
    create_effect(move |_| {
        let id = params.with(|p| p.as_ref().ok().and_then(|p| p.id.clone()));
        set_loading.set(true);

        spawn_local(async move {
            let loaded = match id {
                Some(id) => match api::fetch_pillar(&id).await {
                    Ok(found) => found,
                    Err(e) => {
                        log_load_error("pillar", &e);
                        None
                    }
                },
                None => None,
            };
            pillar.set(loaded);
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }
            match pillar.get() {
                Some(pillar) => view! { <PillarView pillar=pillar /> }.into_view(),
                None => view! {
                    <div class="max-w-xl mx-auto text-center py-16">
                        <div class="p-4 mb-6 rounded-lg bg-red-50 border border-red-200 text-red-800">
                            "Pillar not found"
                        </div>
                        <A
                            href="/framework"
                            class="px-6 py-3 bg-primary-900 hover:bg-primary-800 text-white rounded-lg font-medium"
                        >
                            "Back to Framework"
                        </A>
                    </div>
                }.into_view(),
            }
        }}
    }
}

#[component]
fn PillarView(pillar: Pillar) -> impl IntoView {
    let accent = if pillar.color.is_empty() {
        pillar_color(&pillar.id).to_string()
    } else {
        pillar.color.clone()
    };
    let cta = format!(
        "Join us in making a lasting impact through {}",
        pillar.title.to_lowercase()
    );

    view! {
        <div class="space-y-10">
            <A href="/framework" class="text-primary-900 hover:underline">"← Back to Framework"</A>

            <section
                class="rounded-2xl text-white p-10"
                style=format!("background-color: {}", accent)
            >
                <h1 class="text-4xl font-bold mb-4">{pillar.title}</h1>
                <p class="text-lg opacity-90 max-w-3xl">{pillar.description}</p>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-primary-900 mb-6">"Programs & Initiatives"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {pillar.programs.into_iter().map(|program| view! {
                        <div class="bg-white rounded-xl shadow-md hover:shadow-xl hover:-translate-y-1 transition-all p-6">
                            <h3 class="text-xl font-semibold mb-2">{program.title}</h3>
                            <p class="text-gray-600 mb-4">{program.summary}</p>
                            <div class="flex items-center justify-between">
                                <span class="px-3 py-1 text-xs rounded-full bg-green-50 text-green-800">
                                    {program.impact}
                                </span>
                                <span class="text-sm font-medium text-primary-900">"📈 Learn More"</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="bg-gray-50 rounded-2xl p-10 text-center">
                <h2 class="text-2xl font-bold mb-2">"Get Involved"</h2>
                <p class="text-gray-600 mb-6">{cta}</p>
                <div class="inline-block rounded-lg" style=format!("background-color: {}", accent)>
                    <A href="/get-involved" class="block px-8 py-3 text-white font-semibold">
                        "Get Involved"
                    </A>
                </div>
            </section>
        </div>
    }
}
