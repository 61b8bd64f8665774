//! # REST API for Child Management
//!
//! Endpoints for creating, listing, updating and deleting the caller's
//! children. Every route requires a bearer token.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::api_error::ApiResult;
use super::auth::Caller;
use super::mappers::ChildMapper;
use crate::AppState;
use shared::{Child, ChildResponse, CreateChildRequest, UpdateChildRequest};

/// Create a child owned by the caller
pub async fn create_child(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<CreateChildRequest>,
) -> ApiResult<(StatusCode, Json<ChildResponse>)> {
    info!("POST /api/children - request: {:?}", request);

    let child = state
        .child_service
        .create_child(&caller.account_id, ChildMapper::to_create_command(request))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ChildMapper::to_response(child, "Child created successfully")),
    ))
}

/// List the caller's children
pub async fn list_children(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<Vec<Child>>> {
    info!("GET /api/children");

    let children = state.child_service.list_children(&caller.account_id).await?;

    Ok(Json(children.into_iter().map(ChildMapper::to_dto).collect()))
}

/// Get one of the caller's children
pub async fn get_child(
    State(state): State<AppState>,
    caller: Caller,
    Path(child_id): Path<String>,
) -> ApiResult<Json<Child>> {
    info!("GET /api/children/{}", child_id);

    let child = state
        .child_service
        .get_owned_child(&caller.account_id, &child_id)
        .await?;

    Ok(Json(ChildMapper::to_dto(child)))
}

/// Update one of the caller's children
pub async fn update_child(
    State(state): State<AppState>,
    caller: Caller,
    Path(child_id): Path<String>,
    Json(request): Json<UpdateChildRequest>,
) -> ApiResult<Json<ChildResponse>> {
    info!("PUT /api/children/{} - request: {:?}", child_id, request);

    let child = state
        .child_service
        .update_child(
            &caller.account_id,
            &child_id,
            ChildMapper::to_update_command(request),
        )
        .await?;

    Ok(Json(ChildMapper::to_response(child, "Child updated successfully")))
}

/// Delete one of the caller's children with its history
pub async fn delete_child(
    State(state): State<AppState>,
    caller: Caller,
    Path(child_id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/children/{}", child_id);

    state
        .child_service
        .delete_child(&caller.account_id, &child_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
