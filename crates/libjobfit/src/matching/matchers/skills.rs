use tracing::instrument;

use crate::{
  matching::{MatchContext, synonyms::SynonymTable},
  model::{JobFacts, ResumeFacts},
};

/// Weight of each required skill in the skills sub-score.
const REQUIRED_WEIGHT: f64 = 2.0;
/// Weight of each nice-to-have skill.
const NICE_TO_HAVE_WEIGHT: f64 = 1.0;

pub(crate) struct SkillsTally {
  pub score: f64,
  pub matched: Vec<String>,
  pub missing: Vec<String>,
}

/// Scores a candidate's declared skills against a job's required and
/// nice-to-have lists. Jobs with no declared skill requirements score a full
/// 100. Matched skills keep the job posting's own spelling and ordering,
/// deduplicated by first occurrence; only required skills are tracked as
/// missing.
#[instrument(level = "trace", name = "skills_match", skip_all)]
pub(crate) fn evaluate(ctx: &MatchContext, resume: &ResumeFacts, job: &JobFacts) -> SkillsTally {
  if job.required_skills.is_empty() && job.nice_to_have_skills.is_empty() {
    return SkillsTally { score: 100.0, matched: vec![], missing: vec![] };
  }

  let resume_skills = resume.skills.iter().map(|skill| normalize(skill)).collect::<Vec<_>>();

  let mut matched: Vec<String> = Vec::new();
  let mut missing = Vec::new();
  let mut score = 0.0;
  let mut max_score = 0.0;

  for skill in &job.required_skills {
    max_score += REQUIRED_WEIGHT;

    let wanted = normalize(skill);

    if resume_skills.iter().any(|owned| equivalent(ctx.synonyms, &wanted, owned)) {
      score += REQUIRED_WEIGHT;

      if !matched.contains(skill) {
        matched.push(skill.clone());
      }
    } else {
      missing.push(skill.clone());
    }
  }

  for skill in &job.nice_to_have_skills {
    max_score += NICE_TO_HAVE_WEIGHT;

    let wanted = normalize(skill);

    if resume_skills.iter().any(|owned| equivalent(ctx.synonyms, &wanted, owned)) {
      score += NICE_TO_HAVE_WEIGHT;

      if !matched.contains(skill) {
        matched.push(skill.clone());
      }
    }
  }

  if max_score == 0.0 {
    return SkillsTally { score: 100.0, matched, missing };
  }

  SkillsTally {
    score: score / max_score * 100.0,
    matched,
    missing,
  }
}

/// Fuzzy skill equivalence: case-insensitive and whitespace-trimmed, true on
/// exact equality, substring containment either way, or membership in the
/// same synonym group.
pub fn skill_matches(synonyms: &SynonymTable, job_skill: &str, resume_skill: &str) -> bool {
  equivalent(synonyms, &normalize(job_skill), &normalize(resume_skill))
}

fn normalize(skill: &str) -> String {
  skill.trim().to_lowercase()
}

fn equivalent(synonyms: &SynonymTable, job_skill: &str, resume_skill: &str) -> bool {
  if job_skill == resume_skill {
    return true;
  }

  if job_skill.contains(resume_skill) || resume_skill.contains(job_skill) {
    return true;
  }

  synonyms.same_group(job_skill, resume_skill)
}
