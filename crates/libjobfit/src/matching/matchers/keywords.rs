use ahash::RandomState;
use libjobfit_macros::scoring_feature;

use crate::{
  matching::{Feature, MatchContext, extractors},
  model::{JobFacts, ResumeFacts},
};

#[scoring_feature(KeywordOverlap, name = "keyword_overlap")]
fn score_feature(&self, _ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> f64 {
  if job.keywords.is_empty() && job.description.is_empty() {
    return 100.0;
  }

  let mut job_keywords = extractors::description_keywords(&job.description);
  job_keywords.extend(job.keywords.iter().map(|keyword| keyword.to_lowercase()));

  if job_keywords.is_empty() {
    return 100.0;
  }

  let resume_keywords = resume
    .keywords
    .iter()
    .map(|keyword| keyword.to_lowercase())
    .collect::<std::collections::HashSet<_, RandomState>>();

  let matches = job_keywords.iter().filter(|keyword| resume_keywords.contains(keyword.as_str())).count();

  matches as f64 / job_keywords.len() as f64 * 100.0
}
