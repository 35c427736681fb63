use std::collections::HashMap;

use axum::{Form, Json, Router, http::StatusCode, routing::post};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::scoring::calculate_score::{ScoreInputError, calculate_score};

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub total_score: u32,
    pub rating: String,
    pub meaning: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreErrorResponse {
    pub error: String,
    pub field: String,
}

impl From<ScoreInputError> for ScoreErrorResponse {
    fn from(e: ScoreInputError) -> Self {
        ScoreErrorResponse {
            field: e.field().to_string(),
            error: e.to_string(),
        }
    }
}

pub fn routes() -> Router {
    Router::new().route("/calculate_score", post(calculate))
}

#[utoipa::path(post, path = "/calculate_score", tag = "Scoring",
    request_body(content = String, content_type = "application/x-www-form-urlencoded",
        description = "Fields data_cleaning (0-40), data_storage (0-30), compliance (0-20), improvement (0-10)"),
    responses(
        (status = 200, body = ScoreResponse),
        (status = 422, body = ScoreErrorResponse)
    ))]
pub async fn calculate(
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<ScoreErrorResponse>)> {
    let result = calculate_score(&form)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, Json(e.into())))?;
    Ok(Json(ScoreResponse {
        total_score: result.total,
        rating: result.tier.label().to_string(),
        meaning: result.tier.meaning().to_string(),
    }))
}
