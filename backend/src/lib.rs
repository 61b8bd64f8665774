//! # Learning Portal Backend
//!
//! Stores generated learning activities and parent feedback, and serves the
//! per-child exposure report computed from them.
//!
//! ## Architecture
//!
//! - **domain**: services, the exposure aggregator and recommendation policy
//! - **storage**: storage traits and their SQLite repositories
//! - **io**: axum handlers, DTO mappers and caller authentication
//!
//! ## Responsibilities
//!
//! - Set up the database and wire services into [`AppState`]
//! - Build the REST router with CORS and request tracing

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::{
    ActivityService, ChildService, FeedbackService, RecommendationDeriver, ReportService,
};
use crate::io::rest::{self, BearerAccountIdentity, IdentityResolver};
use crate::storage::{ActivityRepository, ChildRepository, DbConnection, FeedbackRepository};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub activity_service: ActivityService,
    pub feedback_service: FeedbackService,
    pub report_service: ReportService,
    pub identity: Arc<dyn IdentityResolver>,
}

/// Open the database named in `config` and wire up all services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    Ok(build_state(db, Arc::new(BearerAccountIdentity)))
}

/// Wire services over an open connection
pub fn build_state(db: DbConnection, identity: Arc<dyn IdentityResolver>) -> AppState {
    info!("Setting up domain services");
    let child_storage = Arc::new(ChildRepository::new(db.clone()));
    let activity_storage = Arc::new(ActivityRepository::new(db.clone()));
    let feedback_storage = Arc::new(FeedbackRepository::new(db));

    let child_service = ChildService::new(child_storage);
    let activity_service = ActivityService::new(activity_storage.clone(), child_service.clone());
    let feedback_service = FeedbackService::new(feedback_storage.clone(), activity_storage.clone());
    let report_service = ReportService::new(
        child_service.clone(),
        activity_storage,
        feedback_storage,
        RecommendationDeriver::default(),
    );

    AppState {
        child_service,
        activity_service,
        feedback_service,
        report_service,
        identity,
    }
}

/// Create the router with every `/api` route, CORS and request tracing
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // Full paths rather than `nest`, so `/api` and `/api/` both resolve
    Ok(Router::new()
        .route("/api", get(rest::api_root))
        .route("/api/", get(rest::api_root))
        .route(
            "/api/children",
            get(rest::list_children).post(rest::create_child),
        )
        .route(
            "/api/children/:child_id",
            get(rest::get_child)
                .put(rest::update_child)
                .delete(rest::delete_child),
        )
        .route(
            "/api/children/:child_id/exposure-report",
            get(rest::get_exposure_report),
        )
        .route(
            "/api/activities",
            get(rest::list_activities).post(rest::record_activity),
        )
        .route("/api/activities/:activity_id", get(rest::get_activity))
        .route("/api/feedback", post(rest::submit_feedback))
        .route("/api/feedback/:activity_id", get(rest::list_feedback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
