//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{Json, Router, extract::State, middleware, routing::get};
use voucher_management::repository::schema;
use voucher_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 构建优惠券相关的路由
///
/// `/vouchers/search` 为静态段，优先于 `/vouchers/{id}` 匹配
fn voucher_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vouchers",
            get(handlers::voucher::list_vouchers).post(handlers::voucher::create_voucher),
        )
        .route("/vouchers/search", get(handlers::voucher::search_vouchers))
        .route(
            "/vouchers/{id}",
            get(handlers::voucher::get_voucher).delete(handlers::voucher::delete_voucher),
        )
}

/// 构建用户相关的路由
///
/// `/users/black` 为静态段，优先于 `/users/{id}` 匹配
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route("/users/black", get(handlers::user::list_black_users))
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// 全部业务 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(voucher_routes()).merge(user_routes())
}

/// 构建应用路由：业务 API、探针和可观测性中间件
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "voucher-admin-service"
    }))
}

/// 就绪探针：检查数据库连接和依赖的表
///
/// 使用内存仓储时没有数据库依赖，直接返回 ok
async fn readiness_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let Some(db) = &state.database else {
        return Json(serde_json::json!({
            "status": "ok",
            "service": "voucher-admin-service",
            "checks": {
                "database": "skipped"
            }
        }));
    };

    let readiness = db.readiness(&schema::TABLE_NAMES).await;

    Json(serde_json::json!({
        "status": if readiness.is_ready() { "ok" } else { "degraded" },
        "service": "voucher-admin-service",
        "checks": {
            "database": readiness.as_str(),
            "missing_tables": readiness.missing_tables()
        }
    }))
}
