//! Wire Types
//!
//! Client-side copies of the records the TFDN API serves. Field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub programs: Vec<Program>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    #[serde(default)]
    pub events: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: String,
    pub salary: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub role: String,
    pub score: u8,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub training_links: Vec<String>,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

/// Weights stay on the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub option_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactStory {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResearchReport {
    pub title: String,
    pub description: String,
    /// ISO date, e.g. "2024-12-01"
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolunteerRole {
    pub title: String,
    pub description: String,
    pub color: String,
}

// ============ Forms ============

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub interest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

// ============ Errors ============

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_body() {
        let json = r#"{
            "error": {
                "code": "VALIDATION_ERROR",
                "message": "name: Name must be at least 2 characters",
                "fields": [{"field": "name", "message": "Name must be at least 2 characters"}]
            },
            "request_id": "0f8e7c1a"
        }"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.fields[0].field, "name");
    }

    #[test]
    fn test_volunteer_form_omits_empty_optionals() {
        let form = VolunteerForm {
            name: "Amina".into(),
            email: "amina@example.org".into(),
            interest: "education".into(),
            message: "I want to mentor".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("phone").is_none());
        assert!(value.get("skills").is_none());
    }

    #[test]
    fn test_answer_is_camel_case() {
        let answer = QuizAnswer {
            question_id: "q1".into(),
            option_id: "q1a".into(),
        };
        let value = serde_json::to_value(&answer).unwrap();
        assert_eq!(value["questionId"], "q1");
        assert_eq!(value["optionId"], "q1a");
    }
}
