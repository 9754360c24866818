use std::collections::HashSet;

use ahash::RandomState;
use libjobfit_macros::scoring_feature;

use crate::{
  matching::{Feature, MatchContext},
  model::{JobFacts, ResumeFacts},
};

#[scoring_feature(TitleSimilarity, name = "title_similarity")]
fn score_feature(&self, _ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> f64 {
  if job.title.is_empty() || resume.work_experience.is_empty() {
    return 50.0;
  }

  let job_title = job.title.to_lowercase();
  let job_words = job_title.split_whitespace().collect::<HashSet<_, RandomState>>();

  let mut best = 0.0f64;

  for role in &resume.work_experience {
    if role.title.is_empty() {
      continue;
    }

    let role_title = role.title.to_lowercase();

    // An exact former title is the best possible signal.
    if role_title == job_title {
      return 100.0;
    }

    if job_title.contains(&role_title) || role_title.contains(&job_title) {
      best = best.max(80.0);
    }

    let role_words = role_title.split_whitespace().collect::<HashSet<_, RandomState>>();

    if !job_words.is_empty() && !role_words.is_empty() {
      let overlap = job_words.intersection(&role_words).count() as f64 / job_words.union(&role_words).count() as f64;

      best = best.max(overlap * 100.0);
    }
  }

  best
}

#[cfg(test)]
mod tests {
  use float_cmp::assert_approx_eq;

  use crate::{
    matching::{Feature, MatchContext, synonyms::SYNONYMS},
    model::{JobFacts, ResumeFacts, WorkExperience},
  };

  fn ctx() -> MatchContext<'static> {
    MatchContext { synonyms: SYNONYMS.as_ref(), reference_year: 2026 }
  }

  fn resume_with_titles(titles: &[&str]) -> ResumeFacts {
    ResumeFacts::builder()
      .work_experience(titles.iter().map(|title| WorkExperience::builder().title(title).build()).collect())
      .build()
  }

  #[test]
  fn missing_title_or_history_is_neutral() {
    let job = JobFacts::builder().title("Backend Engineer").build();

    assert_eq!(super::TitleSimilarity.score_feature(&ctx(), &ResumeFacts::builder().build(), &job), 50.0);
    assert_eq!(
      super::TitleSimilarity.score_feature(&ctx(), &resume_with_titles(&["Backend Engineer"]), &JobFacts::builder().build()),
      50.0
    );
  }

  #[test]
  fn exact_title_short_circuits() {
    let resume = resume_with_titles(&["Software Engineer", "Backend Engineer"]);
    let job = JobFacts::builder().title("software engineer").build();

    assert_eq!(super::TitleSimilarity.score_feature(&ctx(), &resume, &job), 100.0);
  }

  #[test]
  fn containment_scores_eighty() {
    let resume = resume_with_titles(&["Senior Backend Engineer"]);
    let job = JobFacts::builder().title("Backend Engineer").build();

    assert_eq!(super::TitleSimilarity.score_feature(&ctx(), &resume, &job), 80.0);
  }

  #[test]
  fn word_overlap_keeps_the_best_role() {
    let resume = resume_with_titles(&["Engineering Manager", "Data Engineer"]);
    let job = JobFacts::builder().title("Data Scientist").build();

    // "Data Engineer" shares one of three distinct words with "Data
    // Scientist"; the manager role shares none.
    assert_approx_eq!(f64, super::TitleSimilarity.score_feature(&ctx(), &resume, &job), 100.0 / 3.0, epsilon = 0.001);
  }

  #[test]
  fn disjoint_titles_score_zero() {
    let resume = resume_with_titles(&["Accountant"]);
    let job = JobFacts::builder().title("Backend Engineer").build();

    assert_eq!(super::TitleSimilarity.score_feature(&ctx(), &resume, &job), 0.0);
  }
}
