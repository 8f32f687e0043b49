//! Form Routes
//!
//! - POST /api/v1/contact - Contact form
//! - POST /api/v1/volunteer - Volunteer application
//! - POST /api/v1/newsletter - Newsletter signup

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::submissions::{ContactForm, FormAck, NewsletterSignup, VolunteerForm};

/// POST /api/v1/contact
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> ApiResult<Json<FormAck>> {
    Ok(Json(state.submissions.submit_contact(&form).await?))
}

/// POST /api/v1/volunteer
pub async fn volunteer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<VolunteerForm>,
) -> ApiResult<Json<FormAck>> {
    Ok(Json(state.submissions.submit_volunteer(&form).await?))
}

/// POST /api/v1/newsletter
pub async fn newsletter(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewsletterSignup>,
) -> ApiResult<Json<FormAck>> {
    Ok(Json(state.submissions.subscribe_newsletter(&form).await?))
}
