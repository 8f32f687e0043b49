//! AI Career Demo Page
//!
//! Intro, quiz and results, one at a time. Scoring happens on the server.

use leptos::*;

use crate::api;
use crate::api::types::{CareerQuestion, CareerRecommendation, QuizAnswer};
use crate::components::{CareerQuiz, CareerResults, Loading};
use crate::state::{log_load_error, GlobalState};

/// Which view the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Quiz,
    Results,
}

impl Phase {
    /// intro -> quiz -> results -> intro, nothing else
    pub fn can_move_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Intro, Phase::Quiz) | (Phase::Quiz, Phase::Results) | (Phase::Results, Phase::Intro)
        )
    }
}

#[component]
pub fn AiCareer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let phase = create_rw_signal(Phase::Intro);
    let questions = create_rw_signal(Vec::<CareerQuestion>::new());
    let recommendations = create_rw_signal(Vec::<CareerRecommendation>::new());
    let (scoring, set_scoring) = create_signal(false);

    let go_to = move |next: Phase| {
        if phase.get_untracked().can_move_to(next) {
            phase.set(next);
        }
    };

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_career_questions().await {
                Ok(data) => questions.set(data),
                Err(e) => log_load_error("career questions", &e),
            }
        });
    });

    let on_complete = Callback::new(move |answers: Vec<QuizAnswer>| {
        set_scoring.set(true);
        spawn_local(async move {
            match api::assess_career(answers).await {
                Ok(recs) => {
                    recommendations.set(recs);
                    go_to(Phase::Results);
                }
                Err(e) => state.show_error(&e),
            }
            set_scoring.set(false);
        });
    });

    let on_restart = Callback::new(move |_: ()| {
        recommendations.set(Vec::new());
        go_to(Phase::Intro);
    });

    view! {
        <div class="space-y-10">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-primary-900 mb-4">"AI Career Platform Demo"</h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                    "Experience our AI-powered career guidance system that matches your skills and interests \
                     with global opportunities in the digital economy."
                </p>
            </section>

            {move || match phase.get() {
                Phase::Intro => view! {
                    <Intro
                        on_start=move |_| go_to(Phase::Quiz)
                        ready=Signal::derive(move || !questions.with(Vec::is_empty))
                    />
                }.into_view(),
                Phase::Quiz => view! {
                    <CareerQuiz
                        questions=questions.get_untracked()
                        on_complete=on_complete
                        scoring=scoring
                    />
                }.into_view(),
                Phase::Results => view! {
                    <CareerResults
                        recommendations=recommendations.get_untracked()
                        on_restart=on_restart
                    />
                }.into_view(),
            }}

            <Show when=move || phase.get() == Phase::Intro>
                <DeveloperNote />
            </Show>
        </div>
    }
}

#[component]
fn Intro(
    #[prop(into)]
    on_start: Callback<()>,
    /// Questions have loaded
    #[prop(into)]
    ready: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md p-8 max-w-3xl mx-auto text-center">
            <h2 class="text-3xl font-bold text-primary-900 mb-4">"Discover Your Ideal Career Path"</h2>
            <p class="text-gray-600 mb-6">
                "Our AI-powered assessment analyzes your preferences, skills, and goals to recommend \
                 the best career opportunities in the digital economy. The quiz takes about 3-5 minutes \
                 and provides personalized training recommendations."
            </p>

            <div class="bg-blue-50 border border-blue-200 text-blue-800 rounded-lg p-4 mb-6 text-left">
                <strong>"Demo Notice: "</strong>
                "This is a demonstration of our AI career guidance system. In production, this would use \
                 advanced machine learning models to provide more accurate and personalized career recommendations."
            </div>

            <div class="text-left bg-gray-50 rounded-lg p-6 mb-8">
                <h3 class="text-lg font-semibold mb-3">"What You'll Get:"</h3>
                <ul class="space-y-1 text-gray-700">
                    <li>"• Personalized career recommendations"</li>
                    <li>"• Skills gap analysis"</li>
                    <li>"• Training module suggestions"</li>
                    <li>"• Scholarship opportunities"</li>
                </ul>
            </div>

            {move || {
                if ready.get() {
                    view! {
                        <button
                            on:click=move |_| on_start.call(())
                            class="px-8 py-3 bg-secondary-600 hover:bg-secondary-700 text-white rounded-lg font-semibold"
                        >
                            "Start Career Assessment"
                        </button>
                    }.into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn DeveloperNote() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto border border-dashed border-gray-300 rounded-lg p-6 text-sm text-gray-600">
            <h4 class="font-semibold text-gray-800 mb-2">"For Developers:"</h4>
            <p class="mb-2">"This demo uses a simple rule-based algorithm. To integrate with a real AI service:"</p>
            <ol class="list-decimal list-inside space-y-1">
                <li>"Point the server at a fixture with your own questions and weights"</li>
                <li>"Replace the scorer behind " <code>"POST /api/v1/career/assess"</code></li>
                <li>"Implement proper prompt engineering for career guidance"</li>
                <li>"Add user data persistence and recommendation history"</li>
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_cycle() {
        assert!(Phase::Intro.can_move_to(Phase::Quiz));
        assert!(Phase::Quiz.can_move_to(Phase::Results));
        assert!(Phase::Results.can_move_to(Phase::Intro));
    }

    #[test]
    fn test_phase_no_skips() {
        assert!(!Phase::Intro.can_move_to(Phase::Results));
        assert!(!Phase::Quiz.can_move_to(Phase::Intro));
        assert!(!Phase::Results.can_move_to(Phase::Quiz));
        assert!(!Phase::Quiz.can_move_to(Phase::Quiz));
    }
}
