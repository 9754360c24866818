#[derive(Debug, thiserror::Error)]
pub enum JobfitError {
  #[error("invalid synonym dictionary: {0}")]
  DictionaryError(#[from] serde_yaml::Error),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
