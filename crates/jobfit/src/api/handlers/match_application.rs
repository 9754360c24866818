use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::api::{AppState, dto::MatchPayload, errors::AppError, middlewares::json_rejection::TypedJson};

/// Scores one application: a single resume against a single job posting.
/// Called synchronously when a candidate applies, so the result can be
/// stored alongside the application.
#[instrument(skip_all)]
pub async fn match_application(State(state): State<AppState>, TypedJson(body): TypedJson<MatchPayload>) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let result = state.matcher.calculate_match(&body.resume, &body.job);

  Ok((StatusCode::OK, Json(result)))
}
