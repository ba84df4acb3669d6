//! 优惠券实体

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::discount::DiscountPolicy;
use super::enums::{VoucherStatus, VoucherType};

/// 文本摘要的字段分隔符
///
/// 摘要字段顺序固定为 `id|discount|type|expiredAt|status`，客户端按此格式解析
pub const SUMMARY_DELIMITER: char = '|';

/// 过期时间保留的小数秒位数，与 TIMESTAMPTZ 的微秒精度一致
pub const EXPIRATION_PRECISION: u16 = 6;

/// 将过期时间截断到存储精度
///
/// 截断后的值写入 PostgreSQL 再读回保持不变
pub fn truncate_expiration(expired_at: DateTime<Utc>) -> DateTime<Utc> {
    expired_at.trunc_subsecs(EXPIRATION_PRECISION)
}

/// 优惠券
///
/// 不变量：
/// - `discount > 0`
/// - PERCENT 类型时 `discount <= 100`
/// - 创建时 `expired_at` 晚于当前时间（读取时不再校验）
///
/// 以上约束由 `VoucherService` 在创建时校验，实体本身只负责状态流转
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: Uuid,
    pub discount: i32,
    pub expired_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
    pub status: VoucherStatus,
}

impl Voucher {
    /// 发放新优惠券：生成新 ID，状态固定为 ISSUED，过期时间截断到微秒
    pub fn issue(discount: i32, expired_at: DateTime<Utc>, voucher_type: VoucherType) -> Self {
        Self {
            id: Uuid::new_v4(),
            discount,
            expired_at: truncate_expiration(expired_at),
            voucher_type,
            status: VoucherStatus::Issued,
        }
    }

    /// 从存储恢复
    pub fn restore(
        id: Uuid,
        discount: i32,
        expired_at: DateTime<Utc>,
        voucher_type: VoucherType,
        status: VoucherStatus,
    ) -> Self {
        Self {
            id,
            discount,
            expired_at,
            voucher_type,
            status,
        }
    }

    /// 折扣策略，每次都按类型重新推导
    pub fn policy(&self) -> DiscountPolicy {
        DiscountPolicy::from_type(self.voucher_type, self.discount)
    }

    pub fn is_used(&self) -> bool {
        self.status == VoucherStatus::Used
    }

    /// 标记为已使用
    ///
    /// 已使用的优惠券返回 false 且不做任何修改
    pub fn mark_used(&mut self) -> bool {
        if !self.status.can_transition_to(VoucherStatus::Used) {
            return false;
        }
        self.status = VoucherStatus::Used;
        true
    }

    /// 文本摘要：`id|discount|type|expiredAt|status`
    ///
    /// 时间戳使用 RFC 3339（UTC，`Z` 后缀）
    pub fn to_summary(&self) -> String {
        [
            self.id.to_string(),
            self.discount.to_string(),
            self.voucher_type.to_string(),
            self.expired_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.status.to_string(),
        ]
        .join(&SUMMARY_DELIMITER.to_string())
    }
}
