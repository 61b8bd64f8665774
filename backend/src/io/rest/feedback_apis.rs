//! # REST API for Activity Feedback

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::api_error::ApiResult;
use super::mappers::FeedbackMapper;
use crate::AppState;
use shared::{Feedback, SubmitFeedbackRequest, SubmitFeedbackResponse};

/// Submit feedback on an activity
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> ApiResult<(StatusCode, Json<SubmitFeedbackResponse>)> {
    info!(
        "POST /api/feedback - activity_id: {}, rating: {}",
        request.activity_id, request.rating
    );

    let feedback = state
        .feedback_service
        .submit_feedback(FeedbackMapper::to_submit_command(request))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackMapper::to_submit_response(&feedback)),
    ))
}

/// All feedback on one activity, oldest first
pub async fn list_feedback(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<Vec<Feedback>>> {
    info!("GET /api/feedback/{}", activity_id);

    let feedback = state.feedback_service.list_feedback(&activity_id).await?;

    Ok(Json(FeedbackMapper::to_dto_list(feedback)))
}
