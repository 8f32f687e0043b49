//! Interactive Timeline Component
//!
//! Strategic timeline 2025-2030. Clicking a year toggles its milestones.

use leptos::*;

use crate::api::types::TimelineEvent;

/// Next selection after clicking `year`: a second click closes it
pub fn toggle_year(selected: Option<i32>, year: i32) -> Option<i32> {
    if selected == Some(year) {
        None
    } else {
        Some(year)
    }
}

#[component]
pub fn InteractiveTimeline(
    #[prop(into)]
    timeline: Signal<Vec<TimelineEvent>>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<i32>);

    let selected_event = move || {
        let year = selected.get()?;
        timeline.get().into_iter().find(|e| e.year == year)
    };

    view! {
        <div class="bg-white rounded-xl shadow-md p-6">
            <h3 class="text-2xl font-bold text-primary-900 text-center mb-8">
                "Strategic Timeline 2025-2030"
            </h3>

            <div class="relative flex justify-between items-center mb-8">
                <div class="absolute left-0 right-0 top-1/2 h-1 bg-primary-100 -z-0" />
                {move || timeline.get().into_iter().map(|event| {
                    let year = event.year;
                    let is_active = move || selected.get() == Some(year);
                    view! {
                        <button
                            on:click=move |_| set_selected.update(|s| *s = toggle_year(*s, year))
                            class=move || {
                                let base = "relative z-10 w-14 h-14 rounded-full font-bold text-sm \
                                            transition-transform hover:scale-110";
                                if is_active() {
                                    format!("{} bg-secondary-600 text-white", base)
                                } else {
                                    format!("{} bg-primary-900 text-white", base)
                                }
                            }
                        >
                            {year}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || match selected_event() {
                Some(event) => view! {
                    <div class="border-l-4 border-secondary-600 pl-4">
                        <h4 class="text-xl font-semibold mb-4">
                            {format!("{} Milestones", event.year)}
                        </h4>
                        <ol class="space-y-3">
                            {event.events.into_iter().enumerate().map(|(i, milestone)| view! {
                                <li class="flex items-start space-x-3">
                                    <span class="flex-shrink-0 w-6 h-6 rounded-full bg-primary-900 text-white text-xs flex items-center justify-center">
                                        {i + 1}
                                    </span>
                                    <div>
                                        <div class="font-semibold">{milestone.title}</div>
                                        <div class="text-gray-600 text-sm">{milestone.desc}</div>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ol>
                    </div>
                }.into_view(),
                None => view! {
                    <p class="text-center text-gray-500">
                        "Click on any year to explore milestones and goals"
                    </p>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_year() {
        assert_eq!(toggle_year(None, 2025), Some(2025));
        assert_eq!(toggle_year(Some(2025), 2027), Some(2027));
        assert_eq!(toggle_year(Some(2027), 2027), None);
    }
}
