use libjobfit_macros::scoring_feature;

use crate::{
  matching::{Feature, MatchContext},
  model::{JobFacts, RemotePreference, ResumeFacts},
};

#[scoring_feature(LocationFit, name = "location_fit")]
fn score_feature(&self, _ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> f64 {
  if job.is_remote && resume.remote_preference == RemotePreference::Remote {
    return 100.0;
  }

  if job.is_hybrid && resume.remote_preference == RemotePreference::Hybrid {
    return 100.0;
  }

  // Candidates set on remote work are a hard mismatch for on-site roles.
  if resume.remote_preference == RemotePreference::Remote && !job.is_remote {
    return 30.0;
  }

  if !resume.preferred_location.is_empty() && !job.location.is_empty() {
    let preferred = resume.preferred_location.to_lowercase();
    let posted = job.location.to_lowercase();

    if posted.contains(&preferred) || preferred.contains(&posted) {
      return 100.0;
    }

    // "City, State" entries get partial credit when the trailing state or
    // country component agrees.
    let preferred_region = preferred.rsplit(',').next().unwrap_or_default().trim();
    let posted_region = posted.rsplit(',').next().unwrap_or_default().trim();

    if preferred.contains(',') && posted.contains(',') && preferred_region == posted_region {
      return 70.0;
    }
  }

  if resume.remote_preference == RemotePreference::Any {
    return 80.0;
  }

  50.0
}

#[cfg(test)]
mod tests {
  use crate::{
    matching::{Feature, MatchContext, synonyms::SYNONYMS},
    model::{JobFacts, RemotePreference, ResumeFacts},
  };

  fn ctx() -> MatchContext<'static> {
    MatchContext { synonyms: SYNONYMS.as_ref(), reference_year: 2026 }
  }

  fn score(resume: &ResumeFacts, job: &JobFacts) -> f64 {
    super::LocationFit.score_feature(&ctx(), resume, job)
  }

  #[test]
  fn remote_job_for_a_remote_candidate() {
    let resume = ResumeFacts::builder()
      .remote_preference(RemotePreference::Remote)
      .preferred_location("Lisbon, Portugal")
      .build();
    let job = JobFacts::builder().is_remote(true).location("Oslo, Norway").build();

    assert_eq!(score(&resume, &job), 100.0);
  }

  #[test]
  fn hybrid_job_for_a_hybrid_candidate() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Hybrid).build();
    let job = JobFacts::builder().is_hybrid(true).build();

    assert_eq!(score(&resume, &job), 100.0);
  }

  #[test]
  fn onsite_job_for_a_remote_candidate() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Remote).build();
    let job = JobFacts::builder().location("Berlin, Germany").build();

    assert_eq!(score(&resume, &job), 30.0);
  }

  #[test]
  fn city_containment_either_direction() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Onsite).preferred_location("Austin").build();
    let job = JobFacts::builder().location("Austin, TX").build();

    assert_eq!(score(&resume, &job), 100.0);
  }

  #[test]
  fn same_trailing_region_scores_seventy() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Onsite).preferred_location("Dallas, TX").build();
    let job = JobFacts::builder().location("Austin, TX").build();

    assert_eq!(score(&resume, &job), 70.0);
  }

  #[test]
  fn flexible_candidates_get_the_benefit_of_the_doubt() {
    let resume = ResumeFacts::builder().preferred_location("Dallas, TX").build();
    let job = JobFacts::builder().location("Oslo, Norway").build();

    assert_eq!(score(&resume, &job), 80.0);
  }

  #[test]
  fn incompatible_locations_fall_back_to_neutral() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Onsite).preferred_location("Dallas, TX").build();
    let job = JobFacts::builder().location("Oslo, Norway").build();

    assert_eq!(score(&resume, &job), 50.0);
  }

  #[test]
  fn unknown_preference_matches_no_rule() {
    let resume = ResumeFacts::builder().remote_preference(RemotePreference::Other).build();
    let job = JobFacts::builder().is_remote(true).build();

    assert_eq!(score(&resume, &job), 50.0);
  }
}
