use std::{
  env::{self, VarError},
  fmt::Display,
  str::FromStr,
};

use crate::api::errors::AppError;

#[derive(Clone)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Ranking defaults, overridable per request
  pub min_score: f64,
  pub match_limit: usize,

  // Observability
  pub enable_prometheus: bool,
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    Ok(Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      min_score: parse_env("MATCH_MIN_SCORE", 50.0)?,
      match_limit: parse_env("MATCH_LIMIT", 50)?,
      enable_prometheus: env::var("ENABLE_PROMETHEUS").unwrap_or_default() == "1",
    })
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => Ok(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}
