use libjobfit::prelude::*;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use validator::Validate;

/// Query parameters shared by the ranking endpoints. `min_score` falls back
/// to the configured default when omitted.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RankParams {
  #[serde(default)]
  pub min_score: Option<f64>,
  #[serde_inline_default(50)]
  pub limit: usize,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct MatchPayload {
  pub resume: ResumeFacts,
  pub job: JobFacts,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct RankCandidatesPayload {
  pub job: JobFacts,
  #[validate(length(min = 1, message = "at least one candidate must be provided"))]
  pub candidates: Vec<CandidateRecord>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct CandidateRecord {
  pub id: String,
  #[serde(flatten)]
  pub resume: ResumeFacts,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct RecommendJobsPayload {
  pub resume: ResumeFacts,
  #[validate(length(min = 1, message = "at least one job must be provided"))]
  pub jobs: Vec<JobRecord>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct JobRecord {
  pub id: String,
  #[serde(flatten)]
  pub job: JobFacts,
}

#[derive(Default, Serialize)]
pub(crate) struct RankResponse {
  pub results: Vec<RankHit>,
  /// Results clearing `min_score`, before truncation to `limit`.
  pub total: usize,
  pub limit: usize,
}

#[derive(Serialize)]
pub(crate) struct RankHit {
  pub id: String,

  #[serde(flatten)]
  pub result: MatchResult,
}
