//! Career Quiz Component
//!
//! One question at a time with a progress bar. Next stays disabled until an
//! option is picked; the last Next hands the answers to the page for scoring.

use leptos::*;

use crate::api::types::{CareerQuestion, QuizAnswer};

/// Where the user is in the question list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizProgress {
    pub current: usize,
    pub answers: Vec<QuizAnswer>,
    pub selected: Option<String>,
}

/// Outcome of pressing Next
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Nothing selected yet
    Blocked,
    Moved,
    Finished(Vec<QuizAnswer>),
}

impl QuizProgress {
    pub fn select(&mut self, option_id: &str) {
        self.selected = Some(option_id.to_string());
    }

    /// The last question leaves the progress untouched so a failed scoring
    /// request can be retried.
    pub fn next(&mut self, questions: &[CareerQuestion]) -> Advance {
        let Some(question) = questions.get(self.current) else {
            return Advance::Blocked;
        };
        let Some(option_id) = self.selected.clone() else {
            return Advance::Blocked;
        };

        let answer = QuizAnswer {
            question_id: question.id.clone(),
            option_id,
        };

        if self.current + 1 >= questions.len() {
            let mut answers = self.answers.clone();
            answers.push(answer);
            return Advance::Finished(answers);
        }

        self.answers.push(answer);
        self.selected = None;
        self.current += 1;
        Advance::Moved
    }

    /// Step back, restoring the earlier choice. False on the first question.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.selected = self.answers.pop().map(|a| a.option_id);
        true
    }

    /// Completion shown in the header, counting the current question
    pub fn percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        (((self.current + 1) as f64 / total as f64) * 100.0).round() as u32
    }
}

#[component]
pub fn CareerQuiz(
    questions: Vec<CareerQuestion>,
    /// Called with every answer once the last question is done
    #[prop(into)]
    on_complete: Callback<Vec<QuizAnswer>>,
    #[prop(into)]
    scoring: Signal<bool>,
) -> impl IntoView {
    let total = questions.len();
    let questions = store_value(questions);
    let progress = create_rw_signal(QuizProgress::default());

    let on_next = move |_| {
        let mut outcome = Advance::Blocked;
        progress.update(|p| outcome = questions.with_value(|qs| p.next(qs)));
        if let Advance::Finished(answers) = outcome {
            on_complete.call(answers);
        }
    };

    let on_previous = move |_| {
        progress.update(|p| {
            p.previous();
        });
    };

    let current_question = move || {
        let index = progress.with(|p| p.current);
        questions.with_value(|qs| qs.get(index).cloned())
    };

    view! {
        <Show
            when=move || !scoring.get()
            fallback=|| view! {
                <div class="flex flex-col items-center justify-center py-16">
                    <div class="loading-spinner w-12 h-12 mb-4" />
                    <h3 class="text-xl font-semibold text-primary-900">"Analyzing Your Responses..."</h3>
                </div>
            }
        >
            <div class="bg-white rounded-xl shadow-md p-8 max-w-3xl mx-auto">
                <div class="flex justify-between text-sm text-gray-600 mb-2">
                    <span>{move || format!("Question {} of {}", progress.with(|p| p.current) + 1, total)}</span>
                    <span>{move || format!("{}% Complete", progress.with(|p| p.percent(total)))}</span>
                </div>
                <div class="w-full h-2 bg-gray-200 rounded-full mb-8">
                    <div
                        class="h-2 bg-primary-900 rounded-full transition-all"
                        style=move || format!("width: {}%", progress.with(|p| p.percent(total)))
                    />
                </div>

                {move || current_question().map(|question| view! {
                    <h3 class="text-2xl font-semibold mb-6">{question.question}</h3>
                    <div class="space-y-3">
                        {question.options.into_iter().map(|option| {
                            let id = option.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || progress.with(|p| p.selected.as_deref() == Some(id.as_str()))
                            };
                            let checked = is_selected.clone();
                            view! {
                                <label class=move || {
                                    let base = "flex items-center p-4 rounded-lg border-2 cursor-pointer transition-colors";
                                    if is_selected() {
                                        format!("{} border-primary-900 bg-primary-50", base)
                                    } else {
                                        format!("{} border-gray-200 hover:border-primary-300", base)
                                    }
                                }>
                                    <input
                                        type="radio"
                                        name="career-option"
                                        class="mr-3"
                                        prop:checked=checked
                                        on:change=move |_| progress.update(|p| p.select(&id))
                                    />
                                    <span>{option.text}</span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                })}

                <div class="flex justify-between mt-8">
                    <button
                        on:click=on_previous
                        disabled=move || progress.with(|p| p.current == 0)
                        class="px-6 py-2 rounded-lg border border-gray-300 text-gray-700 \
                               hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed"
                    >
                        "Previous"
                    </button>
                    <button
                        on:click=on_next
                        disabled=move || progress.with(|p| p.selected.is_none())
                        class="px-6 py-2 rounded-lg bg-secondary-600 text-white font-medium \
                               hover:bg-secondary-700 disabled:opacity-40 disabled:cursor-not-allowed"
                    >
                        {move || {
                            if progress.with(|p| p.current + 1 >= total) {
                                "Get Results"
                            } else {
                                "Next"
                            }
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::QuizOption;

    fn questions(n: usize) -> Vec<CareerQuestion> {
        (1..=n)
            .map(|i| CareerQuestion {
                id: format!("q{}", i),
                question: format!("Question {}", i),
                options: vec![
                    QuizOption { id: format!("q{}a", i), text: "A".into() },
                    QuizOption { id: format!("q{}b", i), text: "B".into() },
                ],
            })
            .collect()
    }

    #[test]
    fn test_next_requires_selection() {
        let qs = questions(2);
        let mut progress = QuizProgress::default();

        assert_eq!(progress.next(&qs), Advance::Blocked);
        assert_eq!(progress.current, 0);
        assert!(progress.answers.is_empty());
    }

    #[test]
    fn test_full_run_finishes_with_all_answers() {
        let qs = questions(2);
        let mut progress = QuizProgress::default();

        progress.select("q1b");
        assert_eq!(progress.next(&qs), Advance::Moved);
        assert_eq!(progress.selected, None);

        progress.select("q2a");
        let Advance::Finished(answers) = progress.next(&qs) else {
            panic!("expected the quiz to finish");
        };
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].option_id, "q1b");
        assert_eq!(answers[1].question_id, "q2");

        // Still on the last question with the choice kept
        assert_eq!(progress.current, 1);
        assert_eq!(progress.selected.as_deref(), Some("q2a"));
        assert_eq!(progress.answers.len(), 1);
    }

    #[test]
    fn test_previous_restores_choice() {
        let qs = questions(3);
        let mut progress = QuizProgress::default();

        assert!(!progress.previous());

        progress.select("q1a");
        progress.next(&qs);
        assert!(progress.previous());
        assert_eq!(progress.current, 0);
        assert_eq!(progress.selected.as_deref(), Some("q1a"));
        assert!(progress.answers.is_empty());
    }

    #[test]
    fn test_percent() {
        let mut progress = QuizProgress::default();
        assert_eq!(progress.percent(4), 25);
        progress.current = 2;
        assert_eq!(progress.percent(4), 75);
        assert_eq!(progress.percent(3), 100);
        assert_eq!(progress.percent(0), 0);
    }
}
