//! Pages
//!
//! Top-level page components for each route.

pub mod ai_career;
pub mod framework;
pub mod get_involved;
pub mod home;
pub mod partners;
pub mod pillar_detail;
pub mod research;

pub use ai_career::AiCareer;
pub use framework::Framework;
pub use get_involved::GetInvolved;
pub use home::Home;
pub use partners::Partners;
pub use pillar_detail::PillarDetail;
pub use research::Research;
