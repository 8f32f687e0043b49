//! Data Transfer Objects
//!
//! Request and response types for the API endpoints that are not plain
//! content records. Content is served in its fixture shape.

use serde::{Deserialize, Serialize};

use crate::content::QuizAnswer;

// ============================================
// CAREER DTOs
// ============================================

/// Career assessment request
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    /// One answer per question, in quiz order
    pub answers: Vec<QuizAnswer>,
}

// ============================================
// CONTENT DTOs
// ============================================

/// Query parameters for impact stories
#[derive(Debug, Default, Deserialize)]
pub struct StoriesQuery {
    /// Return at most this many stories
    pub limit: Option<usize>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Content fixture status: "ok" or "empty"
    pub content: String,
    /// Name of the session provider in use
    pub auth: String,
    /// Whether content calls are artificially delayed
    pub simulated_latency: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
