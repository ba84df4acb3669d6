//! 基础设施错误类型

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sqlx_error() {
        let err = SharedError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, SharedError::Database(_)));
        assert!(err.to_string().starts_with("数据库错误"));
    }
}
