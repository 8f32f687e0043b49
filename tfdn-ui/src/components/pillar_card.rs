//! Pillar Card Component
//!
//! Summary card for one strategic pillar, linking to its detail page.

use leptos::*;
use leptos_router::*;

use crate::api::types::Pillar;

/// Program chips shown before collapsing into "+N more"
const VISIBLE_PROGRAMS: usize = 3;

#[component]
pub fn PillarCard(pillar: Pillar) -> impl IntoView {
    let href = format!("/pillars/{}", pillar.id);
    let hidden = pillar.programs.len().saturating_sub(VISIBLE_PROGRAMS);
    let accent = pillar.color.clone();

    view! {
        <A href=href class="block h-full">
            <div
                class="bg-white rounded-xl shadow-md hover:shadow-xl hover:-translate-y-1 \
                       transition-all p-6 h-full border-t-4"
                style=format!("border-top-color: {}", accent)
            >
                <h3 class="text-xl font-bold mb-2" style=format!("color: {}", pillar.color)>
                    {pillar.title}
                </h3>
                <p class="text-gray-600 mb-4">{pillar.summary}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {pillar.programs.iter().take(VISIBLE_PROGRAMS).map(|program| view! {
                        <span class="px-2 py-1 text-xs rounded-full bg-gray-100 text-gray-700">
                            {program.title.clone()}
                        </span>
                    }).collect_view()}
                    {(hidden > 0).then(|| view! {
                        <span class="px-2 py-1 text-xs rounded-full border border-gray-300 text-gray-600">
                            {format!("+{} more", hidden)}
                        </span>
                    })}
                </div>

                <span class="text-sm font-semibold" style=format!("color: {}", accent)>
                    "Explore Programs →"
                </span>
            </div>
        </A>
    }
}
