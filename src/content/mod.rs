//! TFDN Content
//!
//! Static site content and the mock API that serves it:
//!
//! - **types**: Content records (Pillar, Opportunity, CareerQuestion, ...)
//! - **fixture**: Loading and validating the JSON fixture
//! - **store**: Async accessors with artificial latency
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use tfdn::content::{ContentStore, Fixture};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ContentStore::new(Fixture::embedded()?);
//!
//!     for pillar in store.get_pillars().await {
//!         println!("{}: {} programs", pillar.title, pillar.programs.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fixture;
pub mod store;
pub mod types;

pub use error::{FixtureError, FixtureResult};
pub use fixture::{Fixture, FixtureSummary, EMBEDDED_FIXTURE};
pub use store::ContentStore;
pub use types::{
    CareerCategory, CareerQuestion, ChartData, ChartDataset, ImpactStory, Milestone, Opportunity,
    Partner, Pillar, Program, QuizAnswer, QuizOption, ResearchReport, Stat, TimelineEvent,
    TrainingModule, VolunteerRole,
};
