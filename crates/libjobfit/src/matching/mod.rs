pub(crate) mod matchers;

pub(crate) mod extractors;
pub(crate) mod synonyms;

use crate::{
  matching::synonyms::SynonymTable,
  model::{JobFacts, ResumeFacts},
};

/// Fixed weights combining the five sub-scores into the final match score.
pub(crate) mod weights {
  pub const SKILLS: f64 = 0.40;
  pub const EXPERIENCE: f64 = 0.20;
  pub const LOCATION: f64 = 0.15;
  pub const KEYWORDS: f64 = 0.15;
  pub const TITLE: f64 = 0.10;

  /// Multiplier applied when a candidate is both skill-complete and
  /// experience-qualified, capped so the total never exceeds 100.
  pub const QUALIFICATION_BOOST: f64 = 1.1;
}

/// Shared, immutable inputs every sub-scorer can draw on.
pub(crate) struct MatchContext<'m> {
  pub synonyms: &'m SynonymTable,
  pub reference_year: i16,
}

pub(crate) trait Feature: Send + Sync {
  fn name(&self) -> &'static str;
  fn score_feature(&self, ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> f64;
}
