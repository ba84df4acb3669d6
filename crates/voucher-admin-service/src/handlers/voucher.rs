//! 优惠券 API 处理器
//!
//! 列表与搜索接口返回文本摘要 `id|discount|type|expiredAt|status`

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;
use voucher_management::dto::{CreateVoucherRequest, VoucherResponse};

use crate::{
    dto::{ApiResponse, VoucherSearchParams},
    error::AdminError,
    state::AppState,
};

/// 获取优惠券列表
///
/// GET /api/vouchers
pub async fn list_vouchers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AdminError> {
    let summaries = state.voucher_service.find_all().await?;
    Ok(Json(ApiResponse::success(summaries)))
}

/// 获取优惠券详情
///
/// GET /api/vouchers/{id}
pub async fn get_voucher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VoucherResponse>>, AdminError> {
    let voucher = state.voucher_service.find_by_id(id).await?;
    Ok(Json(ApiResponse::success(voucher)))
}

/// 条件搜索
///
/// GET /api/vouchers/search?type=FIXED&expire=2030-01-01T00:00:00Z
///
/// 两个参数都缺省时返回空列表
pub async fn search_vouchers(
    State(state): State<AppState>,
    Query(params): Query<VoucherSearchParams>,
) -> Result<Json<ApiResponse<Vec<String>>>, AdminError> {
    let summaries = state
        .voucher_service
        .search_all_by_condition(params.voucher_type, params.expired_at)
        .await?;
    Ok(Json(ApiResponse::success(summaries)))
}

/// 创建优惠券
///
/// POST /api/vouchers
pub async fn create_voucher(
    State(state): State<AppState>,
    Json(req): Json<CreateVoucherRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AdminError> {
    state.voucher_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success_empty())))
}

/// 删除优惠券
///
/// DELETE /api/vouchers/{id}
pub async fn delete_voucher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AdminError> {
    state.voucher_service.delete_by_id(id).await?;
    info!(voucher_id = %id, "Voucher deleted");
    Ok(Json(ApiResponse::success_empty()))
}
