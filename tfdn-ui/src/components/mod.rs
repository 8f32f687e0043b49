//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod career_quiz;
pub mod career_results;
pub mod error_fallback;
pub mod footer;
pub mod header;
pub mod impact_chart;
pub mod loading;
pub mod pillar_card;
pub mod sign_in_form;
pub mod stat_card;
pub mod timeline;
pub mod toast;

pub use career_quiz::CareerQuiz;
pub use career_results::CareerResults;
pub use error_fallback::ErrorFallback;
pub use footer::Footer;
pub use header::Header;
pub use impact_chart::ImpactChart;
pub use loading::{CardSkeleton, InlineLoading, Loading};
pub use pillar_card::PillarCard;
pub use sign_in_form::SignInForm;
pub use stat_card::StatCard;
pub use timeline::InteractiveTimeline;
pub use toast::Toast;
