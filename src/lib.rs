//! # TFDN
//!
//! Server side of the Taji Fanisi Development Network site: the content
//! served to the web UI, the AI career assessment and the mock form endpoints.
//!
//! ## Modules
//!
//! - [`content`]: Fixture model, loading and the delayed mock content API
//! - [`career`]: Career-fit scorer and the quiz state machine
//! - [`submissions`]: Contact, volunteer and newsletter form handling
//! - [`auth`]: Session checks against a hosted identity provider
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tfdn::career::{QuizSession, QuizStep};
//! use tfdn::content::Fixture;
//!
//! let fixture = Arc::new(Fixture::embedded().unwrap());
//! let mut quiz = QuizSession::new(fixture);
//!
//! quiz.start().unwrap();
//! for option in ["q1c", "q2c", "q3a", "q4c"] {
//!     quiz.select(option).unwrap();
//!     if quiz.next().unwrap() == QuizStep::Completed {
//!         break;
//!     }
//! }
//!
//! let top = &quiz.recommendations().unwrap()[0];
//! assert_eq!(top.role, "Data Analysis");
//! ```

pub mod api;
pub mod auth;
pub mod career;
pub mod config;
pub mod content;
pub mod submissions;

// Re-export top-level types for convenience
pub use content::{
    CareerCategory, CareerQuestion, ContentStore, Fixture, FixtureError, Opportunity, Pillar,
    QuizAnswer,
};

pub use career::{
    assess_career, CareerError, CareerRecommendation, QuizError, QuizPhase, QuizSession,
    QuizState, QuizStep,
};

pub use submissions::{
    ContactForm, FormAck, NewsletterSignup, Submissions, ValidationError, VolunteerForm,
};

pub use auth::{AuthError, AuthProvider, AuthStatus, DisabledAuth, HostedAuthProvider};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, AuthConfig, Config, ConfigError, ConfigOrigin, ContentConfig, LoggingConfig,
};
