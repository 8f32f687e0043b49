//! Career-fit scorer
//!
//! Maps quiz answers to the three best-fitting career categories.
//!
//! Algorithm:
//! 1. Start every category in the table at 0
//! 2. For each answer, add the chosen option's weights (unknown ids add nothing)
//! 3. Stable sort by total, descending, so ties keep table order
//! 4. Keep the top 3 and normalize each to `round(total / 12 * 100)`, clamped to 0..=100
//! 5. Attach the first opportunity whose type contains the category key or whose
//!    title contains the role name, falling back to the first opportunity
//! 6. Attach every training module sharing a skill with that opportunity

use serde::{Deserialize, Serialize};

use super::error::{CareerError, CareerResult};
use crate::content::{CareerCategory, Fixture, Opportunity, QuizAnswer, TrainingModule};

/// Fixed denominator used to turn a raw total into a percentage
pub const SCORE_DENOMINATOR: f64 = 12.0;

/// Number of recommendations returned
pub const TOP_RECOMMENDATIONS: usize = 3;

/// A scored career suggestion. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub role: String,
    /// Match percentage, 0 - 100
    pub score: u8,
    pub skills: Vec<String>,
    pub training_links: Vec<String>,
    pub opportunity: Opportunity,
}

/// Raw total for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: CareerCategory,
    pub total: i32,
}

/// Sum option weights per category, in table order
pub fn tally(fixture: &Fixture, answers: &[QuizAnswer]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = CareerCategory::all()
        .iter()
        .map(|&category| CategoryTotal { category, total: 0 })
        .collect();

    for answer in answers {
        let option = fixture
            .question(&answer.question_id)
            .and_then(|q| q.option(&answer.option_id));

        let Some(option) = option else {
            tracing::debug!(
                question_id = %answer.question_id,
                option_id = %answer.option_id,
                "Ignoring answer with unknown question or option"
            );
            continue;
        };

        for (category, weight) in &option.weight {
            if let Some(entry) = totals.iter_mut().find(|t| t.category == *category) {
                entry.total = entry.total.saturating_add(*weight);
            }
        }
    }

    totals
}

/// Highest totals first; equal totals keep their table order
pub fn rank(mut totals: Vec<CategoryTotal>) -> Vec<CategoryTotal> {
    // sort_by is stable
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(TOP_RECOMMENDATIONS);
    totals
}

/// Convert a raw total into a 0 - 100 percentage
pub fn normalize(total: i32) -> u8 {
    let pct = (f64::from(total) / SCORE_DENOMINATOR * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Pick the opportunity shown for a category
pub fn match_opportunity<'a>(
    category: CareerCategory,
    opportunities: &'a [Opportunity],
) -> Option<&'a Opportunity> {
    let key = category.key();
    let role = category.role().to_lowercase();

    opportunities
        .iter()
        .find(|o| o.kind.to_lowercase().contains(key) || o.title.to_lowercase().contains(&role))
        .or_else(|| opportunities.first())
}

/// Case-insensitive substring overlap in either direction
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Titles of training modules relevant to an opportunity, in fixture order
pub fn training_links(opportunity: &Opportunity, modules: &[TrainingModule]) -> Vec<String> {
    modules
        .iter()
        .filter(|m| {
            m.skills.iter().any(|skill| {
                opportunity
                    .skills
                    .iter()
                    .any(|opp_skill| skills_overlap(opp_skill, skill))
            })
        })
        .map(|m| m.title.clone())
        .collect()
}

/// Score a full answer set and build the top recommendations
///
/// Pure function of the answers and the fixture. Fails only when the
/// fixture has no opportunity to attach.
pub fn assess_career(
    fixture: &Fixture,
    answers: &[QuizAnswer],
) -> CareerResult<Vec<CareerRecommendation>> {
    if fixture.opportunities.is_empty() {
        return Err(CareerError::NoOpportunities);
    }

    rank(tally(fixture, answers))
        .into_iter()
        .map(|ranked| {
            let opportunity = match_opportunity(ranked.category, &fixture.opportunities)
                .ok_or(CareerError::NoOpportunities)?;

            Ok(CareerRecommendation {
                role: ranked.category.role().to_string(),
                score: normalize(ranked.total),
                skills: opportunity.skills.clone(),
                training_links: training_links(opportunity, &fixture.training_modules),
                opportunity: opportunity.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn fixture() -> Fixture {
        Fixture::embedded().unwrap()
    }

    fn answers(pairs: &[(&str, &str)]) -> Vec<QuizAnswer> {
        pairs.iter().map(|(q, o)| QuizAnswer::new(*q, *o)).collect()
    }

    #[test]
    fn test_deterministic() {
        let fixture = fixture();
        let set = answers(&[("q1", "q1e"), ("q2", "q2b"), ("q3", "q3d"), ("q4", "q4b")]);

        let first = assess_career(&fixture, &set).unwrap();
        for _ in 0..10 {
            assert_eq!(assess_career(&fixture, &set).unwrap(), first);
        }
    }

    #[test]
    fn test_all_va_answers() {
        let fixture = fixture();
        let set = answers(&[("q1", "q1a"), ("q2", "q2a"), ("q3", "q3a"), ("q4", "q4a")]);

        let recs = assess_career(&fixture, &set).unwrap();

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].role, "Virtual Assistant");
        // 3 + 3 + 2 + 3 = 11 -> 91.67 -> 92
        assert_eq!(recs[0].score, 92);
        assert_eq!(recs[0].opportunity.id, "opp-va");
        assert_eq!(recs[0].skills, recs[0].opportunity.skills);

        // data (q3a) and support (q1a) both total 1; data is earlier in the table
        assert_eq!(recs[1].role, "Data Analysis");
        assert_eq!(recs[1].score, 8);
        assert_eq!(recs[2].role, "Customer Support");
    }

    #[test]
    fn test_ties_keep_table_order() {
        let fixture = fixture();

        // No answers: every category is 0, so the top 3 are the first three in the table
        let recs = assess_career(&fixture, &[]).unwrap();
        let roles: Vec<&str> = recs.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Virtual Assistant", "Digital Marketing", "Data Analysis"]);
        assert!(recs.iter().all(|r| r.score == 0));

        // q1e gives writing 2 and design 2: writing precedes design in the table
        let recs = assess_career(&fixture, &answers(&[("q1", "q1e")])).unwrap();
        assert_eq!(recs[0].role, "Content Writing");
        assert_eq!(recs[1].role, "Graphic Design");
        assert_eq!(recs[2].role, "Virtual Assistant");
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let fixture = fixture();
        let with_noise = answers(&[("q2", "q2c"), ("q9", "q9a"), ("q1", "zzz")]);
        let clean = answers(&[("q2", "q2c")]);

        assert_eq!(
            assess_career(&fixture, &with_noise).unwrap(),
            assess_career(&fixture, &clean).unwrap()
        );
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(6), 50);
        assert_eq!(normalize(12), 100);
        assert_eq!(normalize(40), 100);
        assert_eq!(normalize(-5), 0);
        assert_eq!(normalize(1), 8);
    }

    #[test]
    fn test_scores_always_in_range() {
        let fixture = fixture();

        // Answering the same question repeatedly pushes totals past the denominator
        let repeated: Vec<QuizAnswer> = (0..10).map(|_| QuizAnswer::new("q2", "q2e")).collect();
        let recs = assess_career(&fixture, &repeated).unwrap();

        assert_eq!(recs[0].role, "Graphic Design");
        assert_eq!(recs[0].score, 100);
        assert!(recs.iter().all(|r| r.score <= 100));
    }

    #[test]
    fn test_large_weights_saturate() {
        let mut fixture = fixture();
        for question in fixture
            .career_questions
            .iter_mut()
            .filter(|q| q.id == "q1" || q.id == "q2")
        {
            for option in &mut question.options {
                option.weight = BTreeMap::from([(CareerCategory::VirtualAssistant, 2_000_000_000)]);
            }
        }
        let set = answers(&[("q1", "q1a"), ("q2", "q2a")]);

        let totals = tally(&fixture, &set);
        assert_eq!(totals[0].total, i32::MAX);

        let recs = assess_career(&fixture, &set).unwrap();
        assert_eq!(recs[0].role, "Virtual Assistant");
        assert_eq!(recs[0].score, 100);
    }

    #[test]
    fn test_opportunity_fallback() {
        let mut fixture = fixture();
        fixture.opportunities.retain(|o| o.id == "opp-marketing" || o.id == "opp-data");

        let recs = assess_career(&fixture, &answers(&[("q2", "q2e")])).unwrap();

        // No design opportunity left: falls back to the first fixture entry
        assert_eq!(recs[0].role, "Graphic Design");
        assert_eq!(recs[0].opportunity.id, "opp-marketing");
    }

    #[test]
    fn test_match_by_type() {
        let mut fixture = fixture();
        fixture.opportunities[0].kind = "Data Contract".to_string();

        let opp = match_opportunity(CareerCategory::Data, &fixture.opportunities).unwrap();
        assert_eq!(opp.id, fixture.opportunities[0].id);
    }

    #[test]
    fn test_no_opportunities_is_error() {
        let mut fixture = fixture();
        fixture.opportunities.clear();

        assert!(matches!(
            assess_career(&fixture, &[]),
            Err(CareerError::NoOpportunities)
        ));
    }

    #[test]
    fn test_training_links_overlap() {
        let fixture = fixture();
        let support = fixture
            .opportunities
            .iter()
            .find(|o| o.id == "opp-support")
            .unwrap();

        let links = training_links(support, &fixture.training_modules);
        assert_eq!(
            links,
            vec!["Customer Service Excellence", "Business Communication"]
        );
    }

    #[test]
    fn test_skills_overlap_either_direction() {
        assert!(skills_overlap("Data Visualization", "data"));
        assert!(skills_overlap("SQL", "Advanced SQL"));
        assert!(!skills_overlap("Canva", "Excel"));
    }

    #[test]
    fn test_serialized_shape() {
        let fixture = fixture();
        let recs = assess_career(&fixture, &answers(&[("q2", "q2c")])).unwrap();
        let json = serde_json::to_value(&recs[0]).unwrap();

        assert_eq!(json["role"], "Data Analysis");
        assert!(json["trainingLinks"].is_array());
        assert_eq!(json["opportunity"]["type"], "Contract");
    }
}
