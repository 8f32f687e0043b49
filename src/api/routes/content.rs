//! Content Routes
//!
//! Read-only site content, served in fixture shape.
//!
//! - GET /api/v1/pillars - All pillars
//! - GET /api/v1/pillars/:id - One pillar
//! - GET /api/v1/timeline - Strategic timeline
//! - GET /api/v1/opportunities - Job opportunities
//! - GET /api/v1/stats - Headline numbers
//! - GET /api/v1/chart - Impact chart series
//! - GET /api/v1/partners - Partner organizations
//! - GET /api/v1/stories - Impact stories (`?limit=n`)
//! - GET /api/v1/research/reports - Research reports, newest first
//! - GET /api/v1/volunteer/roles - Volunteer roles

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::StoriesQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::content::{
    ChartData, ImpactStory, Opportunity, Partner, Pillar, ResearchReport, Stat, TimelineEvent,
    VolunteerRole,
};

/// GET /api/v1/pillars
pub async fn list_pillars(State(state): State<Arc<AppState>>) -> Json<Vec<Pillar>> {
    Json(state.content.get_pillars().await)
}

/// GET /api/v1/pillars/:id
pub async fn get_pillar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Pillar>> {
    let pillar = state
        .content
        .get_pillar(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Pillar '{}' not found", id)))?;

    Ok(Json(pillar))
}

/// GET /api/v1/timeline
pub async fn timeline(State(state): State<Arc<AppState>>) -> Json<Vec<TimelineEvent>> {
    Json(state.content.get_timeline().await)
}

/// GET /api/v1/opportunities
pub async fn opportunities(State(state): State<Arc<AppState>>) -> Json<Vec<Opportunity>> {
    Json(state.content.get_opportunities().await)
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<Vec<Stat>> {
    Json(state.content.get_stats().await)
}

/// GET /api/v1/chart
pub async fn chart(State(state): State<Arc<AppState>>) -> Json<ChartData> {
    Json(state.content.get_chart_data().await)
}

/// GET /api/v1/partners
pub async fn partners(State(state): State<Arc<AppState>>) -> Json<Vec<Partner>> {
    Json(state.content.get_partners().await)
}

/// GET /api/v1/stories
///
/// The home page asks for `?limit=3`.
pub async fn stories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StoriesQuery>,
) -> Json<Vec<ImpactStory>> {
    Json(state.content.get_impact_stories(query.limit).await)
}

/// GET /api/v1/research/reports
pub async fn research_reports(State(state): State<Arc<AppState>>) -> Json<Vec<ResearchReport>> {
    Json(state.content.get_research_reports().await)
}

/// GET /api/v1/volunteer/roles
pub async fn volunteer_roles(State(state): State<Arc<AppState>>) -> Json<Vec<VolunteerRole>> {
    Json(state.content.get_volunteer_roles().await)
}
