//! Career quiz and scoring
//!
//! - `scorer`: pure mapping from quiz answers to ranked recommendations
//! - `quiz`: intro -> quiz -> results state machine driving a single session

pub mod error;
pub mod quiz;
pub mod scorer;

pub use error::{CareerError, CareerResult, QuizError};
pub use quiz::{QuizAction, QuizPhase, QuizSession, QuizState, QuizStep};
pub use scorer::{assess_career, CareerRecommendation, CategoryTotal};
