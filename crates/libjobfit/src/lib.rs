mod error;
mod matcher;
mod matching;
mod model;
mod scoring;

#[cfg(test)]
mod tests;

pub fn init() {
  let _ = *crate::matching::synonyms::SYNONYMS;
}

pub mod prelude {
  pub use crate::error::JobfitError;
  pub use crate::matcher::JobMatcher;
  pub use crate::matching::matchers::skills::skill_matches;
  pub use crate::matching::synonyms::SynonymTable;
  pub use crate::model::{JobFacts, MatchResult, RemotePreference, ResumeFacts, WorkExperience};
}
