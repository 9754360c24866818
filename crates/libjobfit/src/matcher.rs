use std::sync::Arc;

use bon::bon;
use jiff::Zoned;
use tracing::instrument;

use crate::{
  matching::{
    Feature, MatchContext,
    matchers::{experience::ExperienceFit, keywords::KeywordOverlap, location::LocationFit, skills, title::TitleSimilarity},
    synonyms::{SYNONYMS, SynonymTable},
    weights,
  },
  model::{JobFacts, MatchResult, ResumeFacts},
  scoring,
};

/// Computes compatibility scores between candidate resumes and job postings.
///
/// The matcher is stateless: it holds only the synonym table used for fuzzy
/// skill matching and the calendar year open-ended work experience counts
/// toward, so one instance can be shared freely across threads. Given the
/// same inputs, [`JobMatcher::calculate_match`] always returns the same
/// result.
#[derive(Clone, Debug)]
pub struct JobMatcher {
  synonyms: Arc<SynonymTable>,
  reference_year: i16,
}

impl JobMatcher {
  /// A matcher with the built-in synonym table, valuing open-ended positions
  /// against today's calendar year.
  pub fn new() -> JobMatcher {
    JobMatcher {
      synonyms: SYNONYMS.clone(),
      reference_year: Zoned::now().year(),
    }
  }
}

impl Default for JobMatcher {
  fn default() -> Self {
    JobMatcher::new()
  }
}

#[bon]
impl JobMatcher {
  #[builder]
  pub fn builder(synonyms: Option<Arc<SynonymTable>>, reference_year: Option<i16>) -> JobMatcher {
    JobMatcher {
      synonyms: synonyms.unwrap_or_else(|| SYNONYMS.clone()),
      reference_year: reference_year.unwrap_or_else(|| Zoned::now().year()),
    }
  }
}

impl JobMatcher {
  /// Scores a resume against a job posting across five weighted dimensions
  /// and explains the result.
  #[instrument(name = "calculate_match", skip_all)]
  pub fn calculate_match(&self, resume: &ResumeFacts, job: &JobFacts) -> MatchResult {
    let ctx = MatchContext {
      synonyms: self.synonyms.as_ref(),
      reference_year: self.reference_year,
    };

    let mut reasons = Vec::new();

    let skills = skills::evaluate(&ctx, resume, job);

    tracing::debug!(feature = "skills_match", score = skills.score, "computed feature score");

    if !skills.matched.is_empty() {
      reasons.push(format!("Matches {} required/nice-to-have skills", skills.matched.len()));
    }

    let experience = self.feature(&ctx, &ExperienceFit, resume, job);

    if experience >= 80.0 {
      reasons.push("Experience level matches job requirements".to_string());
    }

    let location = self.feature(&ctx, &LocationFit, resume, job);

    if location >= 80.0 {
      reasons.push("Location preferences align".to_string());
    }

    let keyword = self.feature(&ctx, &KeywordOverlap, resume, job);

    if keyword >= 70.0 {
      reasons.push("Strong keyword alignment with job description".to_string());
    }

    let title = self.feature(&ctx, &TitleSimilarity, resume, job);

    if title >= 70.0 {
      reasons.push("Previous roles similar to this position".to_string());
    }

    let mut total = skills.score * weights::SKILLS
      + experience * weights::EXPERIENCE
      + location * weights::LOCATION
      + keyword * weights::KEYWORDS
      + title * weights::TITLE;

    // Skill-complete and experience-qualified candidates get a boost. A job
    // with no required skills at all trivially satisfies the coverage
    // condition, so the boost then rides on experience alone.
    if skills.matched.len() as f64 >= job.required_skills.len() as f64 * 0.8 && experience >= 80.0 {
      total = (total * weights::QUALIFICATION_BOOST).min(100.0);
      reasons.push("Highly qualified candidate".to_string());
    }

    MatchResult {
      score: round1(total),
      matching_skills: skills.matched,
      missing_skills: skills.missing,
      experience_match: round1(experience),
      location_match: round1(location),
      reasons,
    }
  }

  /// Ranks candidate resumes against one job posting, dropping results under
  /// `min_score`. Equal scores keep their input order.
  #[instrument(name = "rank_candidates", skip_all, fields(candidates = resumes.len()))]
  pub fn rank_candidates<'r>(&self, resumes: &'r [ResumeFacts], job: &JobFacts, min_score: f64) -> Vec<(&'r ResumeFacts, MatchResult)> {
    scoring::rank(resumes, min_score, |resume| self.calculate_match(resume, job))
  }

  /// Ranks job postings against one resume, dropping results under
  /// `min_score`. Equal scores keep their input order.
  #[instrument(name = "find_matching_jobs", skip_all, fields(jobs = jobs.len()))]
  pub fn find_matching_jobs<'j>(&self, resume: &ResumeFacts, jobs: &'j [JobFacts], min_score: f64) -> Vec<(&'j JobFacts, MatchResult)> {
    scoring::rank(jobs, min_score, |job| self.calculate_match(resume, job))
  }

  fn feature(&self, ctx: &MatchContext, feature: &dyn Feature, resume: &ResumeFacts, job: &JobFacts) -> f64 {
    let score = feature.score_feature(ctx, resume, job);

    tracing::debug!(feature = feature.name(), score = score, "computed feature score");

    score
  }
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}
