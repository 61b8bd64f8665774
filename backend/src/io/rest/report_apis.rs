//! # REST API for Exposure Reports

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use super::api_error::ApiResult;
use super::auth::Caller;
use super::mappers::ReportMapper;
use crate::AppState;
use shared::ExposureReport;

/// Exposure report of one of the caller's children, recomputed per request
pub async fn get_exposure_report(
    State(state): State<AppState>,
    caller: Caller,
    Path(child_id): Path<String>,
) -> ApiResult<Json<ExposureReport>> {
    info!("GET /api/children/{}/exposure-report", child_id);

    let report = state
        .report_service
        .generate_report(&caller.account_id, &child_id)
        .await?;

    Ok(Json(ReportMapper::to_dto(report)))
}
