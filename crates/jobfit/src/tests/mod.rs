use libjobfit::prelude::*;

use crate::api::{AppState, config::Config};


fn test_state() -> AppState {
  AppState {
    config: Config::from_env().unwrap(),
    prometheus: None,
    matcher: JobMatcher::builder().reference_year(2026).build(),
  }
}
