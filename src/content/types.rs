//! Core content types for the TFDN site
//!
//! Flat, immutable records loaded from the static fixture:
//! - `Pillar` / `Program`: organizational pillars and their initiatives
//! - `TimelineEvent`: the strategic timeline, grouped by year
//! - `Opportunity` / `TrainingModule`: career listings and training used by the quiz
//! - `CareerQuestion` / `QuizOption` / `QuizAnswer`: the career quiz
//! - `Partner`, `Stat`, `ImpactStory`, `ChartData`, `ResearchReport`, `VolunteerRole`:
//!   supporting page content
//!
//! Field names are camelCase on the wire, matching the authored fixture.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A top-level program category (education, career, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub programs: Vec<Program>,
    /// Accent color as `#rrggbb`
    pub color: String,
}

/// A named initiative belonging to a pillar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub impact: String,
}

/// All milestones planned or reached in one year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub year: i32,
    #[serde(default)]
    pub events: Vec<Milestone>,
}

/// A single timeline milestone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub title: String,
    pub desc: String,
}

/// A mock job/role listing used as quiz output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    /// Employment type ("Remote", "Freelance", ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: String,
    pub salary: String,
    pub link: String,
    pub description: String,
}

/// A training module recommended alongside an opportunity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// Career categories the quiz scores against, in table order
///
/// Declaration order is significant: it is the tie-break order when two
/// categories end the quiz with the same total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CareerCategory {
    #[serde(rename = "va")]
    VirtualAssistant,
    #[serde(rename = "marketing")]
    Marketing,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "support")]
    Support,
    #[serde(rename = "writing")]
    Writing,
    #[serde(rename = "design")]
    Design,
}

impl CareerCategory {
    /// All categories in table order
    pub fn all() -> &'static [CareerCategory] {
        &[
            CareerCategory::VirtualAssistant,
            CareerCategory::Marketing,
            CareerCategory::Data,
            CareerCategory::Support,
            CareerCategory::Writing,
            CareerCategory::Design,
        ]
    }

    /// Short key used in option weight maps
    pub fn key(&self) -> &'static str {
        match self {
            CareerCategory::VirtualAssistant => "va",
            CareerCategory::Marketing => "marketing",
            CareerCategory::Data => "data",
            CareerCategory::Support => "support",
            CareerCategory::Writing => "writing",
            CareerCategory::Design => "design",
        }
    }

    /// Human-readable role name shown in recommendations
    pub fn role(&self) -> &'static str {
        match self {
            CareerCategory::VirtualAssistant => "Virtual Assistant",
            CareerCategory::Marketing => "Digital Marketing",
            CareerCategory::Data => "Data Analysis",
            CareerCategory::Support => "Customer Support",
            CareerCategory::Writing => "Content Writing",
            CareerCategory::Design => "Graphic Design",
        }
    }
}

impl std::fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One quiz question with its answer options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl CareerQuestion {
    /// Look up an option of this question by id
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// An answer option carrying a fixed weight per career category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub weight: BTreeMap<CareerCategory, i32>,
}

/// A (question, option) pair chosen by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub option_id: String,
}

impl QuizAnswer {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// A partner organisation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

/// A headline number shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    /// Icon name (people, public, school, trending_up)
    pub icon: String,
}

/// A testimonial from a program participant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStory {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Series for the impact chart
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// A published research report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchReport {
    pub title: String,
    pub description: String,
    /// Publication date, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A volunteering role listed on the get-involved page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRole {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_order() {
        let keys: Vec<&str> = CareerCategory::all().iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["va", "marketing", "data", "support", "writing", "design"]);

        // Ord follows the table, which the scorer relies on for tie-breaks
        let mut sorted = CareerCategory::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, CareerCategory::all());
    }

    #[test]
    fn test_category_roles() {
        assert_eq!(CareerCategory::VirtualAssistant.role(), "Virtual Assistant");
        assert_eq!(CareerCategory::Data.role(), "Data Analysis");
        assert_eq!(CareerCategory::Design.to_string(), "design");
    }

    #[test]
    fn test_option_weights_deserialize_by_key() {
        let json = r#"{"id": "q1a", "text": "Spreadsheets", "weight": {"data": 3, "va": 1}}"#;
        let option: QuizOption = serde_json::from_str(json).unwrap();

        assert_eq!(option.weight.get(&CareerCategory::Data), Some(&3));
        assert_eq!(option.weight.get(&CareerCategory::VirtualAssistant), Some(&1));
    }

    #[test]
    fn test_unknown_weight_key_is_rejected() {
        let json = r#"{"id": "q1a", "text": "Cooking", "weight": {"chef": 3}}"#;
        assert!(serde_json::from_str::<QuizOption>(json).is_err());
    }

    #[test]
    fn test_opportunity_type_field() {
        let json = r#"{
            "id": "o1", "title": "Virtual Assistant", "type": "Remote",
            "skills": ["Scheduling"], "location": "Remote", "salary": "$400",
            "link": "https://example.org", "description": "Admin support"
        }"#;
        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.kind, "Remote");

        let back = serde_json::to_value(&opp).unwrap();
        assert_eq!(back["type"], "Remote");
    }

    #[test]
    fn test_quiz_answer_camel_case() {
        let answer = QuizAnswer::new("q1", "q1a");
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["questionId"], "q1");
        assert_eq!(json["optionId"], "q1a");
    }

    #[test]
    fn test_report_date_parses() {
        let json = r#"{"title": "R", "description": "D", "date": "2024-12-01", "type": "Annual Report"}"#;
        let report: ResearchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());

        let bad = r#"{"title": "R", "description": "D", "date": "December", "type": "X"}"#;
        assert!(serde_json::from_str::<ResearchReport>(bad).is_err());
    }
}
