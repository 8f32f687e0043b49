//! Quiz flow state machine
//!
//! ```text
//!   Intro --start--> Quiz --next (last question)--> Results --restart--> Intro
//!                    |  ^
//!                    +--+ select / next / previous
//! ```
//!
//! `next` requires a selected option and `previous` is refused on the first
//! question, so the flow never skips a question without input.

use std::sync::Arc;

use super::error::QuizError;
use super::scorer::{assess_career, CareerRecommendation};
use crate::content::{CareerQuestion, Fixture, QuizAnswer};

/// Coarse phase of the quiz, for display and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Intro,
    Quiz,
    Results,
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizPhase::Intro => write!(f, "intro"),
            QuizPhase::Quiz => write!(f, "quiz"),
            QuizPhase::Results => write!(f, "results"),
        }
    }
}

/// Operations accepted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Select,
    Next,
    Previous,
    Restart,
}

impl std::fmt::Display for QuizAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizAction::Start => write!(f, "start"),
            QuizAction::Select => write!(f, "select"),
            QuizAction::Next => write!(f, "go to next question"),
            QuizAction::Previous => write!(f, "go to previous question"),
            QuizAction::Restart => write!(f, "restart"),
        }
    }
}

/// Full quiz state
#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    Intro,
    Quiz {
        /// Index of the question being shown
        current: usize,
        /// Answers to questions `0..current`
        answers: Vec<QuizAnswer>,
        /// Option picked for the current question, if any
        selected: Option<String>,
    },
    Results {
        recommendations: Vec<CareerRecommendation>,
    },
}

impl QuizState {
    pub fn phase(&self) -> QuizPhase {
        match self {
            QuizState::Intro => QuizPhase::Intro,
            QuizState::Quiz { .. } => QuizPhase::Quiz,
            QuizState::Results { .. } => QuizPhase::Results,
        }
    }
}

/// Outcome of a successful `next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the question at this index
    Advanced(usize),
    /// Last question answered, results are ready
    Completed,
}

/// One user's pass through the career quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    fixture: Arc<Fixture>,
    state: QuizState,
}

impl QuizSession {
    /// New session in the intro phase
    pub fn new(fixture: Arc<Fixture>) -> Self {
        Self {
            fixture,
            state: QuizState::Intro,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    pub fn question_count(&self) -> usize {
        self.fixture.career_questions.len()
    }

    /// The question being shown, while in the quiz phase
    pub fn current_question(&self) -> Option<&CareerQuestion> {
        match &self.state {
            QuizState::Quiz { current, .. } => self.fixture.career_questions.get(*current),
            _ => None,
        }
    }

    /// Index of the question being shown
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            QuizState::Quiz { current, .. } => Some(*current),
            _ => None,
        }
    }

    /// Currently selected option id
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            QuizState::Quiz { selected, .. } => selected.as_deref(),
            _ => None,
        }
    }

    /// Answers recorded so far
    pub fn answers(&self) -> &[QuizAnswer] {
        match &self.state {
            QuizState::Quiz { answers, .. } => answers,
            _ => &[],
        }
    }

    /// Completion percentage of the current question, `(current + 1) / count * 100`
    pub fn progress(&self) -> Option<f64> {
        let current = self.current_index()?;
        let count = self.question_count();
        if count == 0 {
            return None;
        }
        Some((current + 1) as f64 / count as f64 * 100.0)
    }

    /// Whether the current question is the last one
    pub fn on_last_question(&self) -> bool {
        self.current_index()
            .map(|c| c + 1 == self.question_count())
            .unwrap_or(false)
    }

    pub fn recommendations(&self) -> Option<&[CareerRecommendation]> {
        match &self.state {
            QuizState::Results { recommendations } => Some(recommendations),
            _ => None,
        }
    }

    fn reject(&self, action: QuizAction) -> QuizError {
        QuizError::InvalidTransition {
            action,
            phase: self.phase(),
        }
    }

    /// Intro -> Quiz, at the first question
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.phase() != QuizPhase::Intro {
            return Err(self.reject(QuizAction::Start));
        }
        if self.question_count() == 0 {
            return Err(QuizError::NoQuestions);
        }

        self.state = QuizState::Quiz {
            current: 0,
            answers: Vec::new(),
            selected: None,
        };
        Ok(())
    }

    /// Pick an option of the current question
    pub fn select(&mut self, option_id: &str) -> Result<(), QuizError> {
        let question = self
            .current_question()
            .ok_or_else(|| self.reject(QuizAction::Select))?;

        if question.option(option_id).is_none() {
            return Err(QuizError::UnknownOption {
                question_id: question.id.clone(),
                option_id: option_id.to_string(),
            });
        }

        if let QuizState::Quiz { selected, .. } = &mut self.state {
            *selected = Some(option_id.to_string());
        }
        Ok(())
    }

    /// Record the selection and advance; on the last question, score and show results
    pub fn next(&mut self) -> Result<QuizStep, QuizError> {
        let QuizState::Quiz {
            current,
            answers,
            selected,
        } = &self.state
        else {
            return Err(self.reject(QuizAction::Next));
        };

        let option_id = selected.clone().ok_or(QuizError::NoSelection)?;
        let question = &self.fixture.career_questions[*current];

        let mut recorded = answers.clone();
        recorded.push(QuizAnswer::new(question.id.clone(), option_id));

        if *current + 1 < self.question_count() {
            let next = *current + 1;
            self.state = QuizState::Quiz {
                current: next,
                answers: recorded,
                selected: None,
            };
            return Ok(QuizStep::Advanced(next));
        }

        let recommendations = assess_career(&self.fixture, &recorded)?;
        tracing::debug!(answers = recorded.len(), "Quiz completed");

        self.state = QuizState::Results { recommendations };
        Ok(QuizStep::Completed)
    }

    /// Step back one question, restoring its answer as the selection
    pub fn previous(&mut self) -> Result<(), QuizError> {
        let QuizState::Quiz {
            current, answers, ..
        } = &self.state
        else {
            return Err(self.reject(QuizAction::Previous));
        };

        if *current == 0 {
            return Err(QuizError::AtFirstQuestion);
        }

        let mut answers = answers.clone();
        let restored = answers.pop().map(|a| a.option_id);

        self.state = QuizState::Quiz {
            current: *current - 1,
            answers,
            selected: restored,
        };
        Ok(())
    }

    /// Results -> Intro, discarding the recommendations
    pub fn restart(&mut self) -> Result<(), QuizError> {
        if self.phase() != QuizPhase::Results {
            return Err(self.reject(QuizAction::Restart));
        }

        self.state = QuizState::Intro;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(Fixture::embedded().unwrap()))
    }

    fn answer_all(session: &mut QuizSession, options: &[&str]) {
        for option in options {
            session.select(option).unwrap();
            session.next().unwrap();
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut quiz = session();
        assert_eq!(quiz.phase(), QuizPhase::Intro);

        quiz.start().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Quiz);
        assert_eq!(quiz.current_index(), Some(0));
        assert_eq!(quiz.progress(), Some(25.0));

        answer_all(&mut quiz, &["q1c", "q2c", "q3a"]);
        assert!(quiz.on_last_question());
        assert_eq!(quiz.answers().len(), 3);

        quiz.select("q4c").unwrap();
        assert_eq!(quiz.next().unwrap(), QuizStep::Completed);
        assert_eq!(quiz.phase(), QuizPhase::Results);

        let recs = quiz.recommendations().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].role, "Data Analysis");
        assert_eq!(recs[0].score, 83);

        quiz.restart().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Intro);
        assert!(quiz.recommendations().is_none());
    }

    #[test]
    fn test_next_requires_selection() {
        let mut quiz = session();
        quiz.start().unwrap();

        assert_eq!(quiz.next(), Err(QuizError::NoSelection));
        assert_eq!(quiz.current_index(), Some(0));
    }

    #[test]
    fn test_select_rejects_foreign_option() {
        let mut quiz = session();
        quiz.start().unwrap();

        let err = quiz.select("q2a").unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { .. }));
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_previous_restores_answer() {
        let mut quiz = session();
        quiz.start().unwrap();
        answer_all(&mut quiz, &["q1b", "q2b"]);
        assert_eq!(quiz.current_index(), Some(2));

        quiz.previous().unwrap();
        assert_eq!(quiz.current_index(), Some(1));
        assert_eq!(quiz.selected(), Some("q2b"));
        assert_eq!(quiz.answers(), &[QuizAnswer::new("q1", "q1b")]);

        quiz.previous().unwrap();
        assert_eq!(quiz.selected(), Some("q1b"));
        assert!(quiz.answers().is_empty());

        assert_eq!(quiz.previous(), Err(QuizError::AtFirstQuestion));
    }

    #[test]
    fn test_changed_answer_after_previous() {
        let mut quiz = session();
        quiz.start().unwrap();
        answer_all(&mut quiz, &["q1a"]);

        quiz.previous().unwrap();
        quiz.select("q1e").unwrap();
        quiz.next().unwrap();

        assert_eq!(quiz.answers(), &[QuizAnswer::new("q1", "q1e")]);
    }

    #[test]
    fn test_only_forward_transitions() {
        let mut quiz = session();

        // Intro: only start
        assert!(matches!(quiz.next(), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.select("q1a"), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.previous(), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.restart(), Err(QuizError::InvalidTransition { .. })));
        assert_eq!(quiz.phase(), QuizPhase::Intro);

        // Quiz: no restart, no second start
        quiz.start().unwrap();
        assert!(matches!(quiz.start(), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.restart(), Err(QuizError::InvalidTransition { .. })));
        assert_eq!(quiz.phase(), QuizPhase::Quiz);

        // Results: only restart
        answer_all(&mut quiz, &["q1a", "q2a", "q3a", "q4a"]);
        assert_eq!(quiz.phase(), QuizPhase::Results);
        assert!(matches!(quiz.start(), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.next(), Err(QuizError::InvalidTransition { .. })));
        assert!(matches!(quiz.previous(), Err(QuizError::InvalidTransition { .. })));
        assert_eq!(quiz.phase(), QuizPhase::Results);
    }

    #[test]
    fn test_no_questions() {
        let mut quiz = QuizSession::new(Arc::new(Fixture::default()));

        assert_eq!(quiz.start(), Err(QuizError::NoQuestions));
        assert_eq!(quiz.phase(), QuizPhase::Intro);
    }

    #[test]
    fn test_scoring_failure_keeps_state() {
        let mut fixture = Fixture::embedded().unwrap();
        fixture.career_questions.truncate(1);
        fixture.opportunities.clear();

        let mut quiz = QuizSession::new(Arc::new(fixture));
        quiz.start().unwrap();
        quiz.select("q1a").unwrap();

        assert!(matches!(quiz.next(), Err(QuizError::Scoring(_))));
        assert_eq!(quiz.phase(), QuizPhase::Quiz);
        assert_eq!(quiz.selected(), Some("q1a"));
    }

    #[test]
    fn test_error_messages() {
        let err = QuizError::InvalidTransition {
            action: QuizAction::Restart,
            phase: QuizPhase::Quiz,
        };
        assert_eq!(err.to_string(), "Cannot restart while in quiz");
    }
}
