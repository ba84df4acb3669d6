//! 请求 DTO 定义
//!
//! 优惠券创建请求直接使用核心层的 `CreateVoucherRequest`，校验顺序由服务层决定

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;
use voucher_management::VoucherType;

/// 优惠券条件搜索参数
///
/// `GET /api/vouchers/search?type=FIXED&expire=2030-01-01T00:00:00Z`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoucherSearchParams {
    #[serde(rename = "type")]
    pub voucher_type: Option<VoucherType>,
    /// RFC 3339 时间戳
    #[serde(rename = "expire")]
    pub expired_at: Option<DateTime<Utc>>,
}

/// 创建用户请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "用户名长度必须在1-50个字符之间"))]
    pub name: String,
}

/// 更新用户请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "用户名长度必须在1-50个字符之间"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_length() {
        assert!(CreateUserRequest { name: "kim".to_string() }.validate().is_ok());
        assert!(CreateUserRequest { name: String::new() }.validate().is_err());
        assert!(
            UpdateUserRequest { name: "a".repeat(51) }
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_search_params_deserialize() {
        let params: VoucherSearchParams =
            serde_json::from_str(r#"{"type":"PERCENT","expire":"2030-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(params.voucher_type, Some(VoucherType::Percent));
        assert!(params.expired_at.is_some());

        let empty: VoucherSearchParams = serde_json::from_str("{}").unwrap();
        assert!(empty.voucher_type.is_none());
        assert!(empty.expired_at.is_none());
    }
}
