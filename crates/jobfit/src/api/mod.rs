use std::time::Duration;

use axum::{
  Router,
  extract::Request,
  middleware,
  routing::{get, post},
};
use libjobfit::prelude::*;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::api::{config::Config, middlewares::RequestId};

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState {
  pub config: Config,
  pub prometheus: Option<PrometheusHandle>,
  pub matcher: JobMatcher,
}

pub fn routes(config: &Config) -> anyhow::Result<Router> {
  libjobfit::init();

  let prometheus = match config.enable_prometheus {
    true => {
      let builder = PrometheusBuilder::new()
        .add_global_label("service", "jobfit")
        .set_buckets_for_metric(Matcher::Full("jobfit_match_scores".into()), &[20.0, 50.0, 70.0, 90.0])?
        .set_buckets_for_metric(Matcher::Full("jobfit_scoring_latency_seconds".into()), &[0.000005, 0.000050, 0.000500, 0.005, 0.05])?;

      Some(builder.install_recorder().expect("failed to install recorder"))
    }

    false => None,
  };

  let state = AppState {
    config: config.clone(),
    prometheus,
    matcher: JobMatcher::new(),
  };

  Ok(
    Router::new()
      .route("/match", post(handlers::match_application))
      .route("/jobs/candidates", post(handlers::rank_candidates))
      .route("/resumes/recommendations", post(handlers::recommend_jobs))
      .fallback(handlers::not_found)
      .layer(middleware::from_fn(middlewares::metrics))
      .layer(TimeoutLayer::new(Duration::from_secs(30)))
      .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
        match req.extensions().get::<RequestId>() {
          Some(RequestId(id)) => tracing::info_span!("request", request_id = %id),
          None => tracing::info_span!("request"),
        }
      }))
      // The routes below will not go through the observability middlewares above
      .route("/healthz", get(handlers::healthz))
      .route("/metrics", get(handlers::prometheus))
      .layer(middleware::from_fn(middlewares::logging::api_logger))
      .layer(middleware::from_fn(middlewares::request_id))
      .with_state(state),
  )
}
