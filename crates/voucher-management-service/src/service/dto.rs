//! 服务层数据传输对象
//!
//! 定义服务层与外部交互使用的 DTO，与内部领域模型解耦

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{User, Voucher, VoucherStatus, VoucherType};

/// 创建优惠券请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoucherRequest {
    pub discount: i32,
    pub expired_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
}

/// 优惠券详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherResponse {
    pub id: Uuid,
    pub discount: i32,
    pub expired_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
    pub status: VoucherStatus,
}

impl From<Voucher> for VoucherResponse {
    fn from(voucher: Voucher) -> Self {
        Self {
            id: voucher.id,
            discount: voucher.discount,
            expired_at: voucher.expired_at,
            voucher_type: voucher.voucher_type,
            status: voucher.status,
        }
    }
}

/// 用户详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
