use std::{collections::HashSet, sync::LazyLock};

use ahash::RandomState;
use regex::Regex;

static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]{4,}").unwrap());

/// Keyword candidates from free text: maximal alphabetic runs of at least
/// four letters, lowercased. No stemming, no stopword removal.
pub(crate) fn description_keywords(text: &str) -> HashSet<String, RandomState> {
  let text = text.to_lowercase();

  KEYWORD_REGEX.find_iter(&text).map(|keyword| keyword.as_str().to_string()).collect()
}

/// The leading year of a free-text date expected to start with `YYYY` or
/// `YYYY-MM`. Anything that does not parse yields no value rather than an
/// error, so one malformed entry never poisons a whole work history.
pub(crate) fn leading_year(date: &str) -> Option<i16> {
  date.split('-').next()?.trim().parse().ok()
}
