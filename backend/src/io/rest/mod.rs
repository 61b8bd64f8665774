//! # REST API Interface Layer
//!
//! HTTP endpoints of the learning portal. Handlers translate requests into
//! domain commands, call the services and map results back to the `shared`
//! DTOs. Domain errors become JSON error bodies through [`ApiError`].

pub mod activity_apis;
pub mod api_error;
pub mod auth;
pub mod child_apis;
pub mod feedback_apis;
pub mod mappers;
pub mod report_apis;

pub use activity_apis::*;
pub use api_error::{ApiError, ApiResult};
pub use auth::{BearerAccountIdentity, Caller, IdentityResolver};
pub use child_apis::*;
pub use feedback_apis::*;
pub use report_apis::*;

use axum::Json;
use tracing::info;

use shared::ApiMessage;

/// API banner
pub async fn api_root() -> Json<ApiMessage> {
    info!("GET /api");
    Json(ApiMessage {
        message: "Homeschool Learning Portal API".to_string(),
    })
}
