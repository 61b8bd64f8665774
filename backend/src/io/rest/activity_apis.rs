//! # REST API for Activities
//!
//! Recording is open to guests; naming a child requires a bearer token for
//! the account that owns it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::api_error::{ApiError, ApiResult};
use super::auth::Caller;
use super::mappers::ActivityMapper;
use crate::domain::commands::activities::ActivityListQuery;
use crate::AppState;
use shared::{Activity, RecordActivityRequest};

/// Query string of `GET /api/activities`
#[derive(Debug, Default, Deserialize)]
pub struct ActivityListParams {
    pub child_id: Option<String>,
    pub subject: Option<String>,
    pub intelligence: Option<String>,
    pub age: Option<u32>,
}

impl From<ActivityListParams> for ActivityListQuery {
    fn from(params: ActivityListParams) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        ActivityListQuery {
            child_id: non_blank(params.child_id),
            subject: non_blank(params.subject),
            intelligence: non_blank(params.intelligence),
            age: params.age,
        }
    }
}

/// Record an activity produced by the generator
pub async fn record_activity(
    State(state): State<AppState>,
    caller: Option<Caller>,
    Json(request): Json<RecordActivityRequest>,
) -> ApiResult<(StatusCode, Json<Activity>)> {
    info!("POST /api/activities - title: {}", request.title);

    let names_child = request
        .child_id
        .as_deref()
        .map_or(false, |id| !id.trim().is_empty());
    if names_child && caller.is_none() {
        return Err(ApiError::Unauthenticated);
    }

    let activity = state
        .activity_service
        .record_activity(
            caller.as_ref().map(|c| c.account_id.as_str()),
            ActivityMapper::to_record_command(request),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ActivityMapper::to_dto(activity))))
}

/// List activities, newest first
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> ApiResult<Json<Vec<Activity>>> {
    info!("GET /api/activities - filters: {:?}", params);

    let activities = state.activity_service.list_activities(params.into()).await?;

    Ok(Json(ActivityMapper::to_dto_list(activities)))
}

/// Get a single activity
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<Activity>> {
    info!("GET /api/activities/{}", activity_id);

    let activity = state.activity_service.get_activity(&activity_id).await?;

    Ok(Json(ActivityMapper::to_dto(activity)))
}
