use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::{DEFAULT_CANDIDATE_POOL, DEFAULT_TOP_K};

use super::AppState;

// Request/Response types

/// User identifier as submitted by clients. Web forms post strings while
/// typed clients may post numbers; both normalize to the same canonical
/// string key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserIdParam {
    Number(i64),
    Text(String),
}

impl UserIdParam {
    fn canonical(&self) -> String {
        match self {
            UserIdParam::Number(id) => id.to_string(),
            UserIdParam::Text(id) => id.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: UserIdParam,
    pub top_k: Option<usize>,
    pub candidate_pool: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub user_id: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub label: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranked recommendations for one user
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let engine = state.engine()?;

    let user_id = request.user_id.canonical();
    if user_id.is_empty() {
        return Err(AppError::InvalidInput("user_id must not be empty".to_string()));
    }
    let top_k = request.top_k.unwrap_or(DEFAULT_TOP_K);
    let candidate_pool = request.candidate_pool.unwrap_or(DEFAULT_CANDIDATE_POOL);
    if top_k == 0 || candidate_pool == 0 {
        return Err(AppError::InvalidInput(
            "top_k and candidate_pool must be greater than zero".to_string(),
        ));
    }

    match engine.recommend(&user_id, top_k, candidate_pool)? {
        Some(recommendations) => Ok(Json(RecommendationResponse {
            user_id,
            recommendations,
        })),
        None => Err(AppError::NotFound(format!("user '{user_id}' not found"))),
    }
}

/// Sentiment label for one review text
pub async fn predict_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> AppResult<Json<SentimentResponse>> {
    let engine = state.engine()?;

    match engine.predict_sentiment(&request.text)? {
        Some(label) => Ok(Json(SentimentResponse { label })),
        None => Err(AppError::InvalidInput(
            "review text must not be empty".to_string(),
        )),
    }
}
