mod match_application;
mod rank_candidates;
mod recommend_jobs;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::{AppState, errors::AppError};

pub use self::match_application::match_application;
pub use self::rank_candidates::rank_candidates;
pub use self::recommend_jobs::recommend_jobs;

pub async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}

pub async fn healthz() -> StatusCode {
  StatusCode::OK
}

pub async fn prometheus(State(state): State<AppState>) -> impl IntoResponse {
  match state.prometheus {
    Some(handle) => handle.render().into_response(),
    None => AppError::ResourceNotFound.into_response(),
  }
}
