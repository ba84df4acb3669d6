//! 优惠券枚举类型定义
//!
//! 枚举以名称文本（FIXED、PERCENT、ISSUED、USED）持久化，JSON 序列化使用同样的名称

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 无法识别的枚举文本
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("未知的 {kind} 取值: {value:?}")]
pub struct UnknownDiscriminator {
    pub kind: &'static str,
    pub value: String,
}

/// 优惠券类型
///
/// 决定折扣策略：固定金额或百分比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherType {
    /// 固定金额 - 直接减去折扣值
    Fixed,
    /// 百分比 - 按折扣率减免，折扣值范围 [1, 100]
    Percent,
}

impl VoucherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Percent => "PERCENT",
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Self::Percent)
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoucherType {
    type Err = UnknownDiscriminator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(Self::Fixed),
            "PERCENT" => Ok(Self::Percent),
            other => Err(UnknownDiscriminator {
                kind: "voucher type",
                value: other.to_string(),
            }),
        }
    }
}

/// 优惠券状态
///
/// 只允许 ISSUED -> USED 单向流转，USED 为终态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    /// 已发放 - 初始状态
    #[default]
    Issued,
    /// 已使用 - 终态
    Used,
}

impl VoucherStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Used => "USED",
        }
    }

    /// 检查能否流转到目标状态
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!((self, next), (Self::Issued, Self::Used))
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoucherStatus {
    type Err = UnknownDiscriminator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ISSUED" => Ok(Self::Issued),
            "USED" => Ok(Self::Used),
            other => Err(UnknownDiscriminator {
                kind: "voucher status",
                value: other.to_string(),
            }),
        }
    }
}
