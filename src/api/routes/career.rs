//! Career Routes
//!
//! - GET /api/v1/career/questions - Quiz questions
//! - POST /api/v1/career/assess - Score a completed quiz

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::AssessRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::career::CareerRecommendation;
use crate::content::CareerQuestion;

/// GET /api/v1/career/questions
pub async fn questions(State(state): State<Arc<AppState>>) -> Json<Vec<CareerQuestion>> {
    Json(state.content.get_career_questions().await)
}

/// POST /api/v1/career/assess
///
/// Returns the top three recommendations for the submitted answers.
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssessRequest>,
) -> ApiResult<Json<Vec<CareerRecommendation>>> {
    if req.answers.is_empty() {
        return Err(ApiError::Validation(
            "At least one answer is required".to_string(),
        ));
    }

    let recommendations = state.content.assess_career(&req.answers).await?;
    Ok(Json(recommendations))
}
