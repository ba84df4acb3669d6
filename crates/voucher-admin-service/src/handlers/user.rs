//! 用户 API 处理器

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;
use voucher_management::dto::UserResponse;

use crate::{
    dto::{ApiResponse, CreateUserRequest, UpdateUserRequest},
    error::AdminError,
    state::AppState,
};

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AdminError> {
    let users = state.user_service.find_all().await?;
    Ok(Json(ApiResponse::success(users)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AdminError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// 黑名单用户名
///
/// GET /api/users/black
pub async fn list_black_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AdminError> {
    let names = state.user_service.find_all_black().await?;
    Ok(Json(ApiResponse::success(names)))
}

/// 创建用户，返回新用户 ID
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Uuid>>), AdminError> {
    req.validate()?;

    let id = state.user_service.create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(id))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<()>>, AdminError> {
    req.validate()?;

    state.user_service.update(id, &req.name).await?;
    Ok(Json(ApiResponse::success_empty()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AdminError> {
    state.user_service.delete_by_id(id).await?;
    Ok(Json(ApiResponse::success_empty()))
}
