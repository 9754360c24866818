use std::time::Instant;

use metrics::histogram;

use crate::model::MatchResult;

/// Scores every item, keeps those at or above `min_score`, and sorts the
/// survivors by descending score. The sort is stable, so equal scores keep
/// their input order; inputs are never mutated.
pub(crate) fn rank<T>(items: &[T], min_score: f64, score_one: impl Fn(&T) -> MatchResult) -> Vec<(&T, MatchResult)> {
  let then = Instant::now();
  let mut results = Vec::with_capacity(items.len());

  for item in items {
    let result = score_one(item);

    tracing::debug!(score = result.score, "computed score");

    histogram!("jobfit_match_scores").record(result.score);

    if result.score >= min_score {
      results.push((item, result));
    }
  }

  results.sort_by(|(_, lhs), (_, rhs)| rhs.score.total_cmp(&lhs.score));

  histogram!("jobfit_scoring_latency_seconds").record(then.elapsed().as_secs_f64());

  results
}
