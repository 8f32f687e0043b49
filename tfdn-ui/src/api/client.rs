//! HTTP API Client
//!
//! Functions for talking to the TFDN REST API and to the hosted auth provider.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::*;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Default hosted auth provider URL
pub const DEFAULT_AUTH_BASE: &str = "http://localhost:8083/auth";

const API_URL_KEY: &str = "tfdn_api_url";
const AUTH_URL_KEY: &str = "tfdn_auth_url";

fn stored_url(key: &str, default: &str) -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .unwrap_or_else(|| default.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    stored_url(API_URL_KEY, DEFAULT_API_BASE)
}

/// Get the auth provider URL from local storage or use default
pub fn get_auth_base() -> String {
    stored_url(AUTH_URL_KEY, DEFAULT_AUTH_BASE)
}

// ============ Helpers ============

async fn error_message(response: Response) -> String {
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Content ============

pub async fn fetch_pillars() -> Result<Vec<Pillar>, String> {
    get_json("/pillars").await
}

/// Fetch one pillar. `Ok(None)` when the id is unknown.
pub async fn fetch_pillar(id: &str) -> Result<Option<Pillar>, String> {
    let response = Request::get(&format!("{}/pillars/{}", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_timeline() -> Result<Vec<TimelineEvent>, String> {
    get_json("/timeline").await
}

pub async fn fetch_opportunities() -> Result<Vec<Opportunity>, String> {
    get_json("/opportunities").await
}

pub async fn fetch_stats() -> Result<Vec<Stat>, String> {
    get_json("/stats").await
}

pub async fn fetch_chart() -> Result<ChartData, String> {
    get_json("/chart").await
}

pub async fn fetch_partners() -> Result<Vec<Partner>, String> {
    get_json("/partners").await
}

pub async fn fetch_stories(limit: usize) -> Result<Vec<ImpactStory>, String> {
    get_json(&format!("/stories?limit={}", limit)).await
}

pub async fn fetch_research_reports() -> Result<Vec<ResearchReport>, String> {
    get_json("/research/reports").await
}

pub async fn fetch_volunteer_roles() -> Result<Vec<VolunteerRole>, String> {
    get_json("/volunteer/roles").await
}

// ============ Career ============

pub async fn fetch_career_questions() -> Result<Vec<CareerQuestion>, String> {
    get_json("/career/questions").await
}

pub async fn assess_career(answers: Vec<QuizAnswer>) -> Result<Vec<CareerRecommendation>, String> {
    #[derive(Serialize)]
    struct AssessRequest {
        answers: Vec<QuizAnswer>,
    }

    post_json("/career/assess", &AssessRequest { answers }).await
}

// ============ Forms ============

pub async fn submit_contact(form: &ContactForm) -> Result<FormAck, String> {
    post_json("/contact", form).await
}

pub async fn submit_volunteer(form: &VolunteerForm) -> Result<FormAck, String> {
    post_json("/volunteer", form).await
}

pub async fn subscribe_newsletter(email: &str) -> Result<FormAck, String> {
    let signup = NewsletterSignup {
        email: email.to_string(),
    };
    post_json("/newsletter", &signup).await
}

// ============ Session ============

/// Ask the TFDN server whether the token is a live session
pub async fn check_session(token: Option<&str>) -> Result<SessionStatus, String> {
    let mut request = Request::get(&format!("{}/session", get_api_base()));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[derive(Debug, serde::Deserialize)]
struct SignInResponse {
    token: String,
}

/// Sign in with the hosted provider. Returns the session token.
///
/// `flow` is `"signIn"` or `"signUp"`; `None` signs in anonymously.
pub async fn provider_sign_in(flow: Option<(&str, &str, &str)>) -> Result<String, String> {
    #[derive(Serialize)]
    struct SignInRequest<'a> {
        provider: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        password: Option<&'a str>,
    }

    let body = match flow {
        Some((flow, email, password)) => SignInRequest {
            provider: "password",
            flow: Some(flow),
            email: Some(email),
            password: Some(password),
        },
        None => SignInRequest {
            provider: "anonymous",
            flow: None,
            email: None,
            password: None,
        },
    };

    let response = Request::post(&format!("{}/signin", get_auth_base()))
        .json(&body)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        // Provider errors are plain text, e.g. "Invalid password"
        return Err(response
            .text()
            .await
            .unwrap_or_else(|_| format!("Sign-in failed with status {}", response.status())));
    }

    let result: SignInResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// End the session with the hosted provider
pub async fn provider_sign_out(token: &str) -> Result<(), String> {
    let response = Request::post(&format!("{}/signout", get_auth_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-out failed with status {}", response.status()));
    }

    Ok(())
}
