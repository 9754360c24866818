use libjobfit_macros::scoring_feature;

use crate::{
  matching::{Feature, MatchContext, extractors::leading_year},
  model::{JobFacts, ResumeFacts, WorkExperience},
};

#[derive(Clone, Copy, Debug)]
enum ExperienceLevel {
  Entry,
  Mid,
  Senior,
  Lead,
  Executive,
}

impl ExperienceLevel {
  fn parse(level: &str) -> Option<ExperienceLevel> {
    match level.to_lowercase().as_str() {
      "entry" => Some(ExperienceLevel::Entry),
      "mid" => Some(ExperienceLevel::Mid),
      "senior" => Some(ExperienceLevel::Senior),
      "lead" => Some(ExperienceLevel::Lead),
      "executive" => Some(ExperienceLevel::Executive),
      _ => None,
    }
  }

  /// Expected years of experience for the level, as a `(min, max)` band.
  fn band(self) -> (f64, f64) {
    match self {
      ExperienceLevel::Entry => (0.0, 2.0),
      ExperienceLevel::Mid => (2.0, 5.0),
      ExperienceLevel::Senior => (5.0, 10.0),
      ExperienceLevel::Lead => (7.0, 15.0),
      ExperienceLevel::Executive => (10.0, 50.0),
    }
  }
}

#[scoring_feature(ExperienceFit, name = "experience_fit")]
fn score_feature(&self, ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> f64 {
  if job.experience_level.is_empty() {
    return 100.0;
  }

  // Unknown level strings impose no requirement.
  let Some(level) = ExperienceLevel::parse(&job.experience_level) else {
    return 100.0;
  };

  let total_years = total_years(ctx.reference_year, &resume.work_experience);
  let (min_years, max_years) = level.band();

  if total_years >= min_years {
    // Slight overshoot of the band still reads as a perfect fit;
    // far beyond it, the candidate is overqualified but remains strong.
    if total_years <= max_years + 2.0 { 100.0 } else { 90.0 }
  } else if min_years == 0.0 {
    100.0
  } else {
    (total_years / min_years * 100.0).min(100.0)
  }
}

/// Total years across a work history. Open-ended entries run until the
/// reference year; entries with unparseable dates contribute nothing, and a
/// span never goes negative.
fn total_years(reference_year: i16, work_experience: &[WorkExperience]) -> f64 {
  let mut total_months = 0i32;

  for entry in work_experience {
    let Some(start_year) = leading_year(&entry.start_date) else {
      continue;
    };

    let end_year = if entry.is_current || entry.end_date.is_empty() {
      reference_year
    } else {
      match leading_year(&entry.end_date) {
        Some(year) => year,
        None => continue,
      }
    };

    total_months += (i32::from(end_year) - i32::from(start_year)).max(0) * 12;
  }

  f64::from(total_months) / 12.0
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

  fn resume_with(entries: Vec<WorkExperience>) -> ResumeFacts {
    ResumeFacts::builder().work_experience(entries).build()
  }

  fn job_wanting(level: &str) -> JobFacts {
    JobFacts::builder().experience_level(level).build()
  }

  #[test]
  fn no_required_level_matches_anyone() {
    let score = super::ExperienceFit.score_feature(&ctx(), &resume_with(vec![]), &job_wanting(""));

    assert_eq!(score, 100.0);
  }

  #[test]
  fn unknown_level_matches_anyone() {
    let score = super::ExperienceFit.score_feature(&ctx(), &resume_with(vec![]), &job_wanting("wizard"));

    assert_eq!(score, 100.0);
  }

  #[test]
  fn empty_history_scores_zero_against_senior() {
    let score = super::ExperienceFit.score_feature(&ctx(), &resume_with(vec![]), &job_wanting("senior"));

    assert_eq!(score, 0.0);
  }

  #[test]
  fn open_ended_position_counts_until_the_reference_year() {
    let resume = resume_with(vec![WorkExperience::builder().start_date("2015").is_current(true).build()]);

    // 11 years by 2026: beyond mid's (2, 5) band even with the grace
    // margin, but comfortably within senior's.
    assert_eq!(super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("mid")), 90.0);
    assert_eq!(super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("senior")), 100.0);
  }

  #[test]
  fn partial_credit_below_the_minimum() {
    let resume = resume_with(vec![WorkExperience::builder().start_date("2023").end_date("2026").build()]);

    // 3 years toward senior's minimum of 5.
    assert_approx_eq!(f64, super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("senior")), 60.0, epsilon = 0.001);
  }

  #[test]
  fn level_casing_is_ignored() {
    let resume = resume_with(vec![WorkExperience::builder().start_date("2020").end_date("2026").build()]);

    assert_eq!(super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("Senior")), 100.0);
  }

  #[test]
  fn malformed_dates_are_skipped() {
    let resume = resume_with(vec![
      WorkExperience::builder().start_date("June 2010").end_date("2020").build(),
      WorkExperience::builder().start_date("2023").end_date("mid-pandemic").build(),
      WorkExperience::builder().start_date("2023").end_date("2026").build(),
    ]);

    // Only the last entry parses: 3 years toward mid's minimum of 2.
    assert_eq!(super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("mid")), 100.0);
    assert_approx_eq!(f64, super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("senior")), 60.0, epsilon = 0.001);
  }

  #[test]
  fn reversed_date_ranges_never_subtract() {
    let resume = resume_with(vec![
      WorkExperience::builder().start_date("2026").end_date("2020").build(),
      WorkExperience::builder().start_date("2020").end_date("2023").build(),
    ]);

    assert_approx_eq!(f64, super::ExperienceFit.score_feature(&ctx(), &resume, &job_wanting("senior")), 60.0, epsilon = 0.001);
  }

  #[test]
  fn entry_level_always_reaches_its_minimum() {
    let score = super::ExperienceFit.score_feature(&ctx(), &resume_with(vec![]), &job_wanting("entry"));

    assert_eq!(score, 100.0);
  }
}
