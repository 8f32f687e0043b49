//! Mock content API
//!
//! Async accessors over the in-memory fixture. Every call waits a fixed
//! artificial delay before answering so the UI exercises its loading states
//! the same way it would against a real backend. Latency can be switched
//! off (tests, benchmarks).

use std::sync::Arc;
use std::time::Duration;

use super::fixture::Fixture;
use super::types::{
    CareerQuestion, ChartData, ImpactStory, Opportunity, Partner, Pillar, QuizAnswer,
    ResearchReport, Stat, TimelineEvent, VolunteerRole,
};
use crate::career::{assess_career, CareerRecommendation, CareerResult};

/// Artificial delays per operation, in milliseconds
pub mod delays {
    pub const PILLARS: u64 = 300;
    pub const PILLAR: u64 = 200;
    pub const TIMELINE: u64 = 250;
    pub const OPPORTUNITIES: u64 = 300;
    pub const ASSESS_CAREER: u64 = 800;
    pub const STATS: u64 = 200;
    pub const CHART: u64 = 300;
    pub const PARTNERS: u64 = 200;
    pub const IMPACT_STORIES: u64 = 250;
    pub const QUESTIONS: u64 = 200;
    pub const REPORTS: u64 = 250;
    pub const VOLUNTEER_ROLES: u64 = 200;
}

/// Read-only content store shared by all request handlers
#[derive(Debug, Clone)]
pub struct ContentStore {
    fixture: Arc<Fixture>,
    simulate_latency: bool,
}

impl ContentStore {
    /// Create a store with simulated latency enabled
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture: Arc::new(fixture),
            simulate_latency: true,
        }
    }

    /// Builder method: enable or disable simulated latency
    pub fn with_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    /// Shared handle to the underlying fixture
    pub fn fixture(&self) -> Arc<Fixture> {
        Arc::clone(&self.fixture)
    }

    pub fn simulates_latency(&self) -> bool {
        self.simulate_latency
    }

    async fn delay(&self, ms: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    pub async fn get_pillars(&self) -> Vec<Pillar> {
        self.delay(delays::PILLARS).await;
        self.fixture.pillars.clone()
    }

    /// Get one pillar, `None` if the id is unknown
    pub async fn get_pillar(&self, id: &str) -> Option<Pillar> {
        self.delay(delays::PILLAR).await;
        self.fixture.pillar(id).cloned()
    }

    pub async fn get_timeline(&self) -> Vec<TimelineEvent> {
        self.delay(delays::TIMELINE).await;
        self.fixture.timeline.clone()
    }

    pub async fn get_opportunities(&self) -> Vec<Opportunity> {
        self.delay(delays::OPPORTUNITIES).await;
        self.fixture.opportunities.clone()
    }

    pub async fn get_career_questions(&self) -> Vec<CareerQuestion> {
        self.delay(delays::QUESTIONS).await;
        self.fixture.career_questions.clone()
    }

    /// Score quiz answers against the fixture
    pub async fn assess_career(
        &self,
        answers: &[QuizAnswer],
    ) -> CareerResult<Vec<CareerRecommendation>> {
        self.delay(delays::ASSESS_CAREER).await;

        let recommendations = assess_career(&self.fixture, answers)?;

        tracing::debug!(
            answers = answers.len(),
            top_role = recommendations.first().map(|r| r.role.as_str()).unwrap_or("none"),
            "Assessed career fit"
        );

        Ok(recommendations)
    }

    pub async fn get_stats(&self) -> Vec<Stat> {
        self.delay(delays::STATS).await;
        self.fixture.stats.clone()
    }

    pub async fn get_chart_data(&self) -> ChartData {
        self.delay(delays::CHART).await;
        self.fixture.chart_data.clone()
    }

    pub async fn get_partners(&self) -> Vec<Partner> {
        self.delay(delays::PARTNERS).await;
        self.fixture.partners.clone()
    }

    /// Impact stories, optionally truncated to the first `limit`
    pub async fn get_impact_stories(&self, limit: Option<usize>) -> Vec<ImpactStory> {
        self.delay(delays::IMPACT_STORIES).await;
        let stories = &self.fixture.impact_stories;
        let take = limit.unwrap_or(stories.len()).min(stories.len());
        stories[..take].to_vec()
    }

    /// Research reports, newest first
    pub async fn get_research_reports(&self) -> Vec<ResearchReport> {
        self.delay(delays::REPORTS).await;
        self.fixture.reports_newest_first()
    }

    pub async fn get_volunteer_roles(&self) -> Vec<VolunteerRole> {
        self.delay(delays::VOLUNTEER_ROLES).await;
        self.fixture.volunteer_roles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn store() -> ContentStore {
        ContentStore::new(Fixture::embedded().unwrap()).with_latency(false)
    }

    #[tokio::test]
    async fn test_get_pillar() {
        let store = store();

        let pillar = store.get_pillar("education").await.unwrap();
        assert_eq!(pillar.title, "Education & Skills");
        assert!(store.get_pillar("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_impact_story_limit() {
        let store = store();

        assert_eq!(store.get_impact_stories(Some(3)).await.len(), 3);
        assert_eq!(store.get_impact_stories(Some(100)).await.len(), 4);
        assert_eq!(store.get_impact_stories(None).await.len(), 4);
        assert!(store.get_impact_stories(Some(0)).await.is_empty());
    }

    #[tokio::test]
    async fn test_assess_career_through_store() {
        let store = store();
        let answers = vec![QuizAnswer::new("q2", "q2c"), QuizAnswer::new("q4", "q4c")];

        let recs = store.assess_career(&answers).await.unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].role, "Data Analysis");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let store = ContentStore::new(Fixture::embedded().unwrap());
        assert!(store.simulates_latency());

        let started = tokio::time::Instant::now();
        store.get_pillars().await;
        assert!(started.elapsed() >= Duration::from_millis(delays::PILLARS));
    }

    #[tokio::test]
    async fn test_latency_disabled_is_immediate() {
        let store = store();
        let started = Instant::now();
        store.get_timeline().await;
        assert!(started.elapsed() < Duration::from_millis(delays::TIMELINE));
    }
}
