//! Static content fixture
//!
//! The whole site is backed by one JSON document. A copy is embedded in the
//! binary; a different file can be supplied through configuration.
//!
//! Loading validates the invariants the rest of the crate relies on:
//! - ids are unique within each collection
//! - pillar and volunteer-role colors are `#rrggbb`
//! - every quiz question has at least one option
//!
//! Weight keys and report dates are checked by deserialization itself.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::{FixtureError, FixtureResult};
use super::types::{
    CareerQuestion, ChartData, ImpactStory, Opportunity, Partner, Pillar, ResearchReport, Stat,
    TimelineEvent, TrainingModule, VolunteerRole,
};

/// Fixture compiled into the binary
pub const EMBEDDED_FIXTURE: &str = include_str!("../../data/mock.json");

/// The complete content dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixture {
    pub pillars: Vec<Pillar>,
    pub timeline: Vec<TimelineEvent>,
    pub opportunities: Vec<Opportunity>,
    pub training_modules: Vec<TrainingModule>,
    pub career_questions: Vec<CareerQuestion>,
    pub stats: Vec<Stat>,
    pub chart_data: ChartData,
    pub partners: Vec<Partner>,
    pub impact_stories: Vec<ImpactStory>,
    pub research_reports: Vec<ResearchReport>,
    pub volunteer_roles: Vec<VolunteerRole>,
}

impl Fixture {
    /// Load the fixture compiled into the binary
    pub fn embedded() -> FixtureResult<Self> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    /// Parse and validate a fixture from a JSON string
    pub fn from_json(json: &str) -> FixtureResult<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Load and validate a fixture file
    pub fn load(path: &Path) -> FixtureResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Load from an optional path, falling back to the embedded copy
    pub fn load_or_embedded(path: Option<&Path>) -> FixtureResult<Self> {
        match path {
            Some(p) => {
                tracing::info!("Loading fixture from {:?}", p);
                Self::load(p)
            }
            None => {
                tracing::info!("Using embedded fixture");
                Self::embedded()
            }
        }
    }

    /// Check content invariants
    pub fn validate(&self) -> FixtureResult<()> {
        ensure_unique("pillar", self.pillars.iter().map(|p| p.id.as_str()))?;
        ensure_unique("opportunity", self.opportunities.iter().map(|o| o.id.as_str()))?;
        ensure_unique("training module", self.training_modules.iter().map(|m| m.id.as_str()))?;
        ensure_unique("question", self.career_questions.iter().map(|q| q.id.as_str()))?;
        ensure_unique("partner", self.partners.iter().map(|p| p.id.as_str()))?;
        ensure_unique("story", self.impact_stories.iter().map(|s| s.id.as_str()))?;
        ensure_unique("timeline year", self.timeline.iter().map(|t| t.year.to_string()))?;

        for pillar in &self.pillars {
            ensure_unique(
                &format!("program in pillar '{}'", pillar.id),
                pillar.programs.iter().map(|p| p.id.as_str()),
            )?;
            if !is_hex_color(&pillar.color) {
                return Err(FixtureError::Invalid(format!(
                    "pillar '{}' has invalid color '{}'",
                    pillar.id, pillar.color
                )));
            }
        }

        for role in &self.volunteer_roles {
            if !is_hex_color(&role.color) {
                return Err(FixtureError::Invalid(format!(
                    "volunteer role '{}' has invalid color '{}'",
                    role.title, role.color
                )));
            }
        }

        for question in &self.career_questions {
            if question.options.is_empty() {
                return Err(FixtureError::Invalid(format!(
                    "question '{}' has no options",
                    question.id
                )));
            }
            ensure_unique(
                &format!("option in question '{}'", question.id),
                question.options.iter().map(|o| o.id.as_str()),
            )?;
        }

        Ok(())
    }

    /// Find a pillar by id
    pub fn pillar(&self, id: &str) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.id == id)
    }

    /// Find a quiz question by id
    pub fn question(&self, id: &str) -> Option<&CareerQuestion> {
        self.career_questions.iter().find(|q| q.id == id)
    }

    /// Research reports, newest first
    pub fn reports_newest_first(&self) -> Vec<ResearchReport> {
        let mut reports = self.research_reports.clone();
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        reports
    }

    /// Summary counts, used for startup logging and health output
    pub fn summary(&self) -> FixtureSummary {
        FixtureSummary {
            pillars: self.pillars.len(),
            programs: self.pillars.iter().map(|p| p.programs.len()).sum(),
            opportunities: self.opportunities.len(),
            questions: self.career_questions.len(),
            partners: self.partners.len(),
            reports: self.research_reports.len(),
        }
    }
}

/// Collection sizes of a loaded fixture
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FixtureSummary {
    pub pillars: usize,
    pub programs: usize,
    pub opportunities: usize,
    pub questions: usize,
    pub partners: usize,
    pub reports: usize,
}

impl std::fmt::Display for FixtureSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pillars, {} programs, {} opportunities, {} questions, {} partners, {} reports",
            self.pillars, self.programs, self.opportunities, self.questions, self.partners, self.reports
        )
    }
}

fn ensure_unique<I, S>(what: &str, ids: I) -> FixtureResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if !seen.insert(id.to_string()) {
            return Err(FixtureError::Invalid(format!("duplicate {} id '{}'", what, id)));
        }
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_fixture_loads() {
        let fixture = Fixture::embedded().unwrap();
        let summary = fixture.summary();

        assert_eq!(summary.pillars, 4);
        assert_eq!(summary.opportunities, 6);
        assert_eq!(summary.questions, 4);
        assert!(!fixture.training_modules.is_empty());
        assert!(fixture.pillar("career").is_some());
        assert!(fixture.pillar("unknown").is_none());
    }

    #[test]
    fn test_empty_document_is_valid() {
        let fixture = Fixture::from_json("{}").unwrap();
        assert!(fixture.pillars.is_empty());
        assert!(fixture.chart_data.labels.is_empty());
    }

    #[test]
    fn test_duplicate_pillar_rejected() {
        let json = r##"{"pillars": [
            {"id": "a", "title": "A", "summary": "", "description": "", "color": "#000000"},
            {"id": "a", "title": "B", "summary": "", "description": "", "color": "#ffffff"}
        ]}"##;

        let err = Fixture::from_json(json).unwrap_err();
        assert!(matches!(err, FixtureError::Invalid(ref m) if m.contains("duplicate pillar")));
    }

    #[test]
    fn test_bad_color_rejected() {
        let json = r##"{"pillars": [
            {"id": "a", "title": "A", "summary": "", "description": "", "color": "navy"}
        ]}"##;

        assert!(matches!(Fixture::from_json(json), Err(FixtureError::Invalid(_))));
    }

    #[test]
    fn test_question_without_options_rejected() {
        let json = r#"{"careerQuestions": [{"id": "q1", "question": "?", "options": []}]}"#;
        assert!(matches!(Fixture::from_json(json), Err(FixtureError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Fixture::from_json("{not json"), Err(FixtureError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_FIXTURE.as_bytes()).unwrap();

        let loaded = Fixture::load(file.path()).unwrap();
        assert_eq!(loaded, Fixture::embedded().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Fixture::load(Path::new("/nonexistent/tfdn/mock.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn test_reports_newest_first() {
        let fixture = Fixture::embedded().unwrap();
        let reports = fixture.reports_newest_first();

        assert_eq!(reports[0].title, "African Digital Economy Report 2024");
        assert!(reports.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#1e3a8a"));
        assert!(is_hex_color("#F59E0B"));
        assert!(!is_hex_color("1e3a8a"));
        assert!(!is_hex_color("#1e3a8"));
        assert!(!is_hex_color("#1e3a8g"));
    }
}
