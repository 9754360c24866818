use bon::bon;
use serde::{Deserialize, Serialize};

/// Candidate-side facts the matcher scores against a job posting. All fields
/// are optional on the wire and default to empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResumeFacts {
  pub skills: Vec<String>,
  pub work_experience: Vec<WorkExperience>,
  pub preferred_location: String,
  pub remote_preference: RemotePreference,
  pub keywords: Vec<String>,
}

/// One entry of a candidate's work history. Dates are free text and expected
/// to start with `YYYY` or `YYYY-MM`; anything else is ignored when summing
/// years of experience.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkExperience {
  pub title: String,
  pub start_date: String,
  pub end_date: String,
  pub is_current: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
  Remote,
  Onsite,
  Hybrid,
  #[default]
  Any,
  /// Unrecognized preference strings land here and satisfy none of the
  /// remote, hybrid, or flexible location rules.
  #[serde(other)]
  Other,
}

/// Job-side facts, as posted by an organization.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct JobFacts {
  pub title: String,
  pub description: String,
  pub required_skills: Vec<String>,
  pub nice_to_have_skills: Vec<String>,
  pub experience_level: String,
  pub location: String,
  pub is_remote: bool,
  pub is_hybrid: bool,
  pub keywords: Vec<String>,
}

/// The outcome of scoring one resume against one job posting. Scores are in
/// `[0, 100]`, rounded to one decimal place; skill lists preserve the job's
/// own spelling and ordering.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MatchResult {
  pub score: f64,
  pub matching_skills: Vec<String>,
  pub missing_skills: Vec<String>,
  pub experience_match: f64,
  pub location_match: f64,
  pub reasons: Vec<String>,
}

#[bon]
impl ResumeFacts {
  #[builder]
  pub fn builder(
    skills: Option<&[&str]>,
    work_experience: Option<Vec<WorkExperience>>,
    preferred_location: Option<&str>,
    remote_preference: Option<RemotePreference>,
    keywords: Option<&[&str]>,
  ) -> ResumeFacts {
    ResumeFacts {
      skills: skills.unwrap_or_default().iter().map(ToString::to_string).collect(),
      work_experience: work_experience.unwrap_or_default(),
      preferred_location: preferred_location.unwrap_or_default().to_string(),
      remote_preference: remote_preference.unwrap_or_default(),
      keywords: keywords.unwrap_or_default().iter().map(ToString::to_string).collect(),
    }
  }
}

#[bon]
impl WorkExperience {
  #[builder]
  pub fn builder(title: Option<&str>, start_date: Option<&str>, end_date: Option<&str>, is_current: Option<bool>) -> WorkExperience {
    WorkExperience {
      title: title.unwrap_or_default().to_string(),
      start_date: start_date.unwrap_or_default().to_string(),
      end_date: end_date.unwrap_or_default().to_string(),
      is_current: is_current.unwrap_or_default(),
    }
  }
}

#[bon]
impl JobFacts {
  #[builder]
  pub fn builder(
    title: Option<&str>,
    description: Option<&str>,
    required_skills: Option<&[&str]>,
    nice_to_have_skills: Option<&[&str]>,
    experience_level: Option<&str>,
    location: Option<&str>,
    is_remote: Option<bool>,
    is_hybrid: Option<bool>,
    keywords: Option<&[&str]>,
  ) -> JobFacts {
    JobFacts {
      title: title.unwrap_or_default().to_string(),
      description: description.unwrap_or_default().to_string(),
      required_skills: required_skills.unwrap_or_default().iter().map(ToString::to_string).collect(),
      nice_to_have_skills: nice_to_have_skills.unwrap_or_default().iter().map(ToString::to_string).collect(),
      experience_level: experience_level.unwrap_or_default().to_string(),
      location: location.unwrap_or_default().to_string(),
      is_remote: is_remote.unwrap_or_default(),
      is_hybrid: is_hybrid.unwrap_or_default(),
      keywords: keywords.unwrap_or_default().iter().map(ToString::to_string).collect(),
    }
  }
}
