use std::{collections::HashMap, sync::Arc, sync::LazyLock};

use ahash::RandomState;
use rust_embed::Embed;
use serde::Deserialize;

use crate::error::JobfitError;

#[derive(Embed)]
#[folder = "./assets/skills"]
struct Dictionaries;

/// The built-in skill synonym table, loaded once per process.
pub(crate) static SYNONYMS: LazyLock<Arc<SynonymTable>> = LazyLock::new(|| {
  let file = Dictionaries::get("synonyms.yml").expect("could not read skill synonym dictionary");

  Arc::new(SynonymTable::from_slice(&file.data).expect("could not unmarshal skill synonym dictionary"))
});

/// Groups of interchangeable skill spellings. Two terms are considered
/// synonyms when they belong to the same group; membership is keyed on the
/// lowercased term.
#[derive(Debug, Default)]
pub struct SynonymTable {
  groups: HashMap<String, usize, RandomState>,
}

impl SynonymTable {
  /// Parses a table from a YAML dictionary of `main` terms and their
  /// alternate `forms`, for callers that want to extend or replace the
  /// built-in groups.
  pub fn from_yaml(contents: &str) -> Result<SynonymTable, JobfitError> {
    SynonymTable::from_slice(contents.as_bytes())
  }

  pub fn from_groups<'g>(groups: impl IntoIterator<Item = &'g [&'g str]>) -> SynonymTable {
    let mut table = SynonymTable::default();

    for (index, group) in groups.into_iter().enumerate() {
      for term in group {
        table.groups.insert(term.to_lowercase(), index);
      }
    }

    table
  }

  fn from_slice(data: &[u8]) -> Result<SynonymTable, JobfitError> {
    let dictionary = serde_yaml::from_slice::<SynonymDictionary>(data)?;
    let mut table = SynonymTable::default();

    for (index, entry) in dictionary.synonyms.into_iter().enumerate() {
      table.groups.insert(entry.main.to_lowercase(), index);

      for form in entry.forms {
        table.groups.insert(form.to_lowercase(), index);
      }
    }

    Ok(table)
  }

  /// Whether two already-normalized terms belong to the same synonym group.
  pub fn same_group(&self, lhs: &str, rhs: &str) -> bool {
    match (self.groups.get(lhs), self.groups.get(rhs)) {
      (Some(lhs), Some(rhs)) => lhs == rhs,
      _ => false,
    }
  }
}

#[derive(Deserialize)]
struct SynonymDictionary {
  synonyms: Vec<SynonymDictionaryEntry>,
}

#[derive(Deserialize)]
struct SynonymDictionaryEntry {
  main: String,
  forms: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::{SYNONYMS, SynonymTable};

  #[test]
  fn builtin_table_covers_common_aliases() {
    assert!(SYNONYMS.same_group("javascript", "js"));
    assert!(SYNONYMS.same_group("ecmascript", "js"));
    assert!(SYNONYMS.same_group("aws", "amazon web services"));
    assert!(SYNONYMS.same_group("machine learning", "ml"));

    assert!(!SYNONYMS.same_group("javascript", "ts"));
    assert!(!SYNONYMS.same_group("javascript", "cobol"));
  }

  #[test]
  fn custom_groups_override_nothing_else() {
    let table = SynonymTable::from_groups([&["Rust", "rs"][..], &["go", "golang"][..]]);

    assert!(table.same_group("rust", "rs"));
    assert!(table.same_group("go", "golang"));
    assert!(!table.same_group("rust", "golang"));
  }

  #[test]
  fn from_yaml_accepts_the_dictionary_format() {
    let table = SynonymTable::from_yaml("synonyms:\n  - main: kubernetes\n    forms: [k8s]\n").unwrap();

    assert!(table.same_group("kubernetes", "k8s"));
    assert!(SynonymTable::from_yaml("not: [valid").is_err());
  }
}
