//! 优惠券服务错误类型
//!
//! 定义服务层的业务错误和系统错误

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::repository::StatementError;

/// 优惠券服务错误类型
#[derive(Debug, Error)]
pub enum VoucherError {
    // === 创建校验错误 ===
    #[error("折扣值必须为正数: {0}")]
    NegativeDiscount(i32),

    #[error("百分比折扣超出范围 [1, 100]: {0}")]
    OutRangedDiscount(i32),

    #[error("过期时间必须晚于当前时间: {0}")]
    InvalidExpiration(DateTime<Utc>),

    // === 资源不存在 ===
    #[error("优惠券不存在: {0}")]
    VoucherNotFound(Uuid),

    #[error("用户不存在: {0}")]
    UserNotFound(Uuid),

    // === 系统错误 ===
    #[error("行映射失败: {0}")]
    RowMapping(String),

    #[error("语句构建错误: {0}")]
    Statement(#[from] StatementError),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("参数校验失败: {0}")]
    Validation(String),
}

/// 优惠券服务 Result 类型别名
pub type Result<T> = std::result::Result<T, VoucherError>;

impl VoucherError {
    /// 是否为客户端输入错误
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeDiscount(_)
                | Self::OutRangedDiscount(_)
                | Self::InvalidExpiration(_)
                | Self::Validation(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VoucherNotFound(_) | Self::UserNotFound(_))
    }

    /// 获取错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeDiscount(_) => "NEGATIVE_DISCOUNT",
            Self::OutRangedDiscount(_) => "OUT_RANGED_DISCOUNT",
            Self::InvalidExpiration(_) => "INVALID_EXPIRATION",
            Self::VoucherNotFound(_) | Self::UserNotFound(_) => "NOT_FOUND",
            Self::RowMapping(_) => "ROW_MAPPING_ERROR",
            Self::Statement(_) => "STATEMENT_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        assert!(VoucherError::NegativeDiscount(-1).is_validation_error());
        assert!(VoucherError::OutRangedDiscount(150).is_validation_error());
        assert!(VoucherError::InvalidExpiration(Utc::now()).is_validation_error());
        assert!(!VoucherError::VoucherNotFound(Uuid::nil()).is_validation_error());
        assert!(!VoucherError::RowMapping("bad".to_string()).is_validation_error());
    }

    #[test]
    fn test_not_found_kinds() {
        assert!(VoucherError::VoucherNotFound(Uuid::nil()).is_not_found());
        assert!(VoucherError::UserNotFound(Uuid::nil()).is_not_found());
        assert!(!VoucherError::NegativeDiscount(0).is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            VoucherError::NegativeDiscount(0).error_code(),
            "NEGATIVE_DISCOUNT"
        );
        assert_eq!(
            VoucherError::OutRangedDiscount(101).error_code(),
            "OUT_RANGED_DISCOUNT"
        );
        assert_eq!(
            VoucherError::VoucherNotFound(Uuid::nil()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            VoucherError::from(sqlx::Error::RowNotFound).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = VoucherError::OutRangedDiscount(150);
        assert!(err.to_string().contains("150"));
    }
}
