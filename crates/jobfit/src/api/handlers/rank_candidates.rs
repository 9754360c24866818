use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{Query, WithRejection};
use itertools::Itertools;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{RankCandidatesPayload, RankHit, RankParams, RankResponse},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

/// Ranks a batch of candidate resumes against one job posting, for
/// recruiters reviewing who fits an opening best. Results under `min_score`
/// (the configured default unless overridden) are dropped, the rest sorted
/// by descending score and truncated to `limit`.
#[instrument(skip_all, fields(candidates = body.candidates.len()))]
pub async fn rank_candidates(
  State(state): State<AppState>,
  WithRejection(Query(params), _): WithRejection<Query<RankParams>, AppError>,
  TypedJson(body): TypedJson<RankCandidatesPayload>,
) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let min_score = params.min_score.unwrap_or(state.config.min_score);
  let limit = params.limit.min(state.config.match_limit);

  let scored = body
    .candidates
    .into_iter()
    .map(|candidate| (candidate.id, state.matcher.calculate_match(&candidate.resume, &body.job)))
    .filter(|(_, result)| result.score >= min_score)
    .collect::<Vec<_>>();

  let total = scored.len();

  let results = scored
    .into_iter()
    // Stable sort, so candidates with equal scores keep their request order
    .sorted_by(|(_, lhs), (_, rhs)| rhs.score.total_cmp(&lhs.score))
    .take(limit)
    .map(|(id, result)| RankHit { id, result })
    .collect::<Vec<_>>();

  Ok((StatusCode::OK, Json(RankResponse { results, total, limit })))
}
