//! 折扣策略
//!
//! 策略只由优惠券类型决定，持久化时只保存类型，从存储恢复时按类型重新推导。

use rust_decimal::Decimal;

use super::enums::VoucherType;

/// 折扣策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountPolicy {
    /// 固定金额减免
    Fixed { amount: i32 },
    /// 百分比减免
    Percent { rate: i32 },
}

impl DiscountPolicy {
    pub fn from_type(voucher_type: VoucherType, discount: i32) -> Self {
        match voucher_type {
            VoucherType::Fixed => Self::Fixed { amount: discount },
            VoucherType::Percent => Self::Percent { rate: discount },
        }
    }

    pub fn voucher_type(&self) -> VoucherType {
        match self {
            Self::Fixed { .. } => VoucherType::Fixed,
            Self::Percent { .. } => VoucherType::Percent,
        }
    }

    /// 计算折后金额
    ///
    /// - Fixed: `base - amount`，不做下限保护，调用方需保证 `amount <= base`
    /// - Percent: `base - base * rate / 100`，十进制精确运算，不做范围校验
    pub fn apply(&self, base: i64) -> Decimal {
        let base = Decimal::from(base);
        match *self {
            Self::Fixed { amount } => base - Decimal::from(amount),
            Self::Percent { rate } => base - base * Decimal::from(rate) / Decimal::ONE_HUNDRED,
        }
    }
}
