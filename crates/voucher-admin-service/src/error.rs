//! 管理后台错误类型定义
//!
//! 将服务层错误映射为 HTTP 状态码和统一的错误响应体

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use voucher_management::VoucherError;

/// 管理后台错误类型
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    /// 优惠券创建校验失败，`code` 为具体的校验错误码
    #[error("{message}")]
    InvalidVoucher { code: &'static str, message: String },

    // 资源不存在
    #[error("{0}")]
    NotFound(String),

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AdminError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidVoucher { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidVoucher { code, .. } => *code,
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => {
                tracing::warn!(code = other.error_code(), error = %other, "请求被拒绝");
                other.to_string()
            }
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for AdminError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 从核心服务错误转换
impl From<VoucherError> for AdminError {
    fn from(err: VoucherError) -> Self {
        if err.is_not_found() {
            return Self::NotFound(err.to_string());
        }

        match err {
            VoucherError::Database(e) => Self::Database(e),
            VoucherError::Validation(msg) => Self::Validation(msg),
            err if err.is_validation_error() => Self::InvalidVoucher {
                code: err.error_code(),
                message: err.to_string(),
            },
            other => Self::Internal(other.to_string()),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AdminError>;
