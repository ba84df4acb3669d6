//! 条件搜索
//!
//! | type | expiredAt | 行为 |
//! |------|-----------|------|
//! | 缺省 | 缺省 | 返回空列表，不执行语句 |
//! | 给定 | 缺省 | 按 type 过滤 |
//! | 缺省 | 给定 | 按 expired_at 过滤 |
//! | 给定 | 给定 | 两个条件 AND，先绑定 type 再绑定 expired_at |

use chrono::{DateTime, Utc};

use super::schema::vouchers;
use super::statement::Statement;
use crate::models::{Voucher, VoucherType};

/// 条件搜索的四种形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCondition {
    Unconstrained,
    ByType(VoucherType),
    ByExpiration(DateTime<Utc>),
    ByTypeAndExpiration(VoucherType, DateTime<Utc>),
}

impl SearchCondition {
    pub fn from_filters(
        voucher_type: Option<VoucherType>,
        expired_at: Option<DateTime<Utc>>,
    ) -> Self {
        match (voucher_type, expired_at) {
            (None, None) => Self::Unconstrained,
            (Some(voucher_type), None) => Self::ByType(voucher_type),
            (None, Some(expired_at)) => Self::ByExpiration(expired_at),
            (Some(voucher_type), Some(expired_at)) => {
                Self::ByTypeAndExpiration(voucher_type, expired_at)
            }
        }
    }

    pub fn voucher_type(&self) -> Option<VoucherType> {
        match *self {
            Self::ByType(voucher_type) | Self::ByTypeAndExpiration(voucher_type, _) => {
                Some(voucher_type)
            }
            _ => None,
        }
    }

    pub fn expired_at(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::ByExpiration(expired_at) | Self::ByTypeAndExpiration(_, expired_at) => {
                Some(expired_at)
            }
            _ => None,
        }
    }

    /// 对应的查询语句，无条件时为 None
    ///
    /// 绑定顺序与 [`Self::voucher_type`]、[`Self::expired_at`] 的先后一致
    pub fn statement(&self) -> Option<Statement> {
        let select = Statement::select_from(vouchers::TABLE, &vouchers::ALL);
        match self {
            Self::Unconstrained => None,
            Self::ByType(_) => Some(select.where_eq(vouchers::TYPE)),
            Self::ByExpiration(_) => Some(select.where_eq(vouchers::EXPIRED_AT)),
            Self::ByTypeAndExpiration(..) => Some(
                select
                    .where_eq(vouchers::TYPE)
                    .and_eq(vouchers::EXPIRED_AT),
            ),
        }
    }

    /// 内存实现使用的谓词，无条件时不匹配任何记录
    pub fn matches(&self, voucher: &Voucher) -> bool {
        match *self {
            Self::Unconstrained => false,
            Self::ByType(voucher_type) => voucher.voucher_type == voucher_type,
            Self::ByExpiration(expired_at) => voucher.expired_at == expired_at,
            Self::ByTypeAndExpiration(voucher_type, expired_at) => {
                voucher.voucher_type == voucher_type && voucher.expired_at == expired_at
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn expired_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2031, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_four_shapes() {
        assert_eq!(
            SearchCondition::from_filters(None, None),
            SearchCondition::Unconstrained
        );
        assert_eq!(
            SearchCondition::from_filters(Some(VoucherType::Fixed), None),
            SearchCondition::ByType(VoucherType::Fixed)
        );
        assert_eq!(
            SearchCondition::from_filters(None, Some(expired_at())),
            SearchCondition::ByExpiration(expired_at())
        );
        assert_eq!(
            SearchCondition::from_filters(Some(VoucherType::Percent), Some(expired_at())),
            SearchCondition::ByTypeAndExpiration(VoucherType::Percent, expired_at())
        );
    }

    #[test]
    fn test_unconstrained_has_no_statement() {
        assert!(SearchCondition::Unconstrained.statement().is_none());
    }

    #[test]
    fn test_single_predicate_statements() {
        let by_type = SearchCondition::ByType(VoucherType::Fixed)
            .statement()
            .unwrap();
        assert_eq!(
            by_type.build().unwrap(),
            "SELECT id, discount, expired_at, type, status FROM vouchers WHERE type = $1"
        );

        let by_expiration = SearchCondition::ByExpiration(expired_at())
            .statement()
            .unwrap();
        assert_eq!(
            by_expiration.build().unwrap(),
            "SELECT id, discount, expired_at, type, status FROM vouchers WHERE expired_at = $1"
        );
    }

    #[test]
    fn test_combined_statement_binds_type_first() {
        let statement = SearchCondition::ByTypeAndExpiration(VoucherType::Percent, expired_at())
            .statement()
            .unwrap();
        assert_eq!(
            statement.build().unwrap(),
            "SELECT id, discount, expired_at, type, status FROM vouchers \
             WHERE type = $1 AND expired_at = $2"
        );
        assert_eq!(
            statement.bind_order(),
            vec![vouchers::TYPE, vouchers::EXPIRED_AT]
        );
    }

    #[test]
    fn test_matches() {
        let voucher = Voucher::issue(30, expired_at(), VoucherType::Percent);

        assert!(!SearchCondition::Unconstrained.matches(&voucher));
        assert!(SearchCondition::ByType(VoucherType::Percent).matches(&voucher));
        assert!(!SearchCondition::ByType(VoucherType::Fixed).matches(&voucher));
        assert!(SearchCondition::ByExpiration(expired_at()).matches(&voucher));
        assert!(
            SearchCondition::ByTypeAndExpiration(VoucherType::Percent, expired_at())
                .matches(&voucher)
        );
        assert!(
            !SearchCondition::ByTypeAndExpiration(VoucherType::Fixed, expired_at())
                .matches(&voucher)
        );
    }

    #[test]
    fn test_filter_accessors() {
        let condition = SearchCondition::ByTypeAndExpiration(VoucherType::Fixed, expired_at());
        assert_eq!(condition.voucher_type(), Some(VoucherType::Fixed));
        assert_eq!(condition.expired_at(), Some(expired_at()));
        assert_eq!(SearchCondition::Unconstrained.voucher_type(), None);
        assert_eq!(SearchCondition::ByType(VoucherType::Fixed).expired_at(), None);
    }
}
