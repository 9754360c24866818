use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{Query, WithRejection};
use itertools::Itertools;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{RankHit, RankParams, RankResponse, RecommendJobsPayload},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

/// Ranks a batch of job postings against one resume, for personalized job
/// recommendations. Unlike candidate ranking, no score floor applies unless
/// the caller asks for one.
#[instrument(skip_all, fields(jobs = body.jobs.len()))]
pub async fn recommend_jobs(
  State(state): State<AppState>,
  WithRejection(Query(params), _): WithRejection<Query<RankParams>, AppError>,
  TypedJson(body): TypedJson<RecommendJobsPayload>,
) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let min_score = params.min_score.unwrap_or(0.0);
  let limit = params.limit.min(state.config.match_limit);

  let scored = body
    .jobs
    .into_iter()
    .map(|posting| (posting.id, state.matcher.calculate_match(&body.resume, &posting.job)))
    .filter(|(_, result)| result.score >= min_score)
    .collect::<Vec<_>>();

  let total = scored.len();

  let results = scored
    .into_iter()
    .sorted_by(|(_, lhs), (_, rhs)| rhs.score.total_cmp(&lhs.score))
    .take(limit)
    .map(|(id, result)| RankHit { id, result })
    .collect::<Vec<_>>();

  Ok((StatusCode::OK, Json(RankResponse { results, total, limit })))
}
