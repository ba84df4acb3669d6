//! 优惠券服务
//!
//! 创建时按固定顺序校验输入，删除前检查存在性，查询结果转为文本摘要。
//!
//! ## 校验顺序
//!
//! 1. `discount <= 0` -> NEGATIVE_DISCOUNT（两种类型都检查）
//! 2. PERCENT 且 `discount > 100` -> OUT_RANGED_DISCOUNT
//! 3. `expired_at <= now` -> INVALID_EXPIRATION
//!
//! ## 并发
//!
//! `delete_by_id` 的存在性检查与删除是两次独立的存储往返，并发删除可能导致
//! 第二个调用方的删除成为空操作，这里不做额外同步。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use voucher_shared::observability::metrics;

use crate::error::{Result, VoucherError};
use crate::models::{Voucher, VoucherType, truncate_expiration};
use crate::repository::VoucherRepositoryTrait;
use crate::service::dto::{CreateVoucherRequest, VoucherResponse};

/// 百分比折扣上限
const MAX_PERCENT_DISCOUNT: i32 = 100;

/// 优惠券服务
pub struct VoucherService<R: ?Sized = dyn VoucherRepositoryTrait> {
    repo: Arc<R>,
}

impl<R> VoucherService<R>
where
    R: VoucherRepositoryTrait + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建优惠券
    ///
    /// 过期时间先截断到存储精度再校验，校验通过后生成新 ID、状态为 ISSUED 并持久化
    #[instrument(
        skip(self, request),
        fields(discount = request.discount, voucher_type = %request.voucher_type)
    )]
    pub async fn create(&self, request: CreateVoucherRequest) -> Result<()> {
        let expired_at = truncate_expiration(request.expired_at);

        if let Err(e) = validate_creation(
            request.discount,
            expired_at,
            request.voucher_type,
            Utc::now(),
        ) {
            warn!(error = %e, "优惠券创建校验失败");
            metrics::record_voucher_creation(e.error_code());
            return Err(e);
        }

        let voucher = Voucher::issue(request.discount, expired_at, request.voucher_type);
        self.repo.save(&voucher).await?;
        metrics::record_voucher_creation("success");

        info!(voucher_id = %voucher.id, "优惠券已创建");
        Ok(())
    }

    /// 全部优惠券的文本摘要
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<String>> {
        let vouchers = self.repo.find_all().await?;
        Ok(vouchers.iter().map(Voucher::to_summary).collect())
    }

    /// 条件搜索，两个条件都缺省时结果为空
    #[instrument(skip(self))]
    pub async fn search_all_by_condition(
        &self,
        voucher_type: Option<VoucherType>,
        expired_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<String>> {
        let vouchers = self
            .repo
            .find_all_by_condition(voucher_type, expired_at)
            .await?;
        Ok(vouchers.iter().map(Voucher::to_summary).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<VoucherResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(VoucherResponse::from)
            .ok_or(VoucherError::VoucherNotFound(id))
    }

    /// 删除优惠券，不存在时返回 NotFound 且不执行删除
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        if self.repo.is_not_exists_by_id(id).await? {
            return Err(VoucherError::VoucherNotFound(id));
        }

        self.repo.delete_by_id(id).await?;
        info!(voucher_id = %id, "优惠券已删除");
        Ok(())
    }
}

/// 创建参数校验，检查顺序决定错误优先级
fn validate_creation(
    discount: i32,
    expired_at: DateTime<Utc>,
    voucher_type: VoucherType,
    now: DateTime<Utc>,
) -> Result<()> {
    if discount <= 0 {
        return Err(VoucherError::NegativeDiscount(discount));
    }

    if voucher_type.is_percent() && discount > MAX_PERCENT_DISCOUNT {
        return Err(VoucherError::OutRangedDiscount(discount));
    }

    if expired_at <= now {
        return Err(VoucherError::InvalidExpiration(expired_at));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VoucherStatus;
    use crate::repository::MockVoucherRepositoryTrait;
    use chrono::{Duration, TimeZone};
    use mockall::predicate::eq;

    fn request(
        discount: i32,
        expired_at: DateTime<Utc>,
        voucher_type: VoucherType,
    ) -> CreateVoucherRequest {
        CreateVoucherRequest {
            discount,
            expired_at,
            voucher_type,
        }
    }

    fn stored_voucher() -> Voucher {
        Voucher::restore(
            Uuid::parse_str("5f1c7a52-2d7e-4f0b-8a43-9c1e2b7d6a01").unwrap(),
            1000,
            Utc.with_ymd_and_hms(2031, 3, 1, 9, 30, 0).unwrap(),
            VoucherType::Fixed,
            VoucherStatus::Issued,
        )
    }

    #[test]
    fn test_non_positive_discount_fails_for_both_types() {
        let now = Utc::now();
        let future = now + Duration::days(1);

        for discount in [0, -1, i32::MIN] {
            for voucher_type in [VoucherType::Fixed, VoucherType::Percent] {
                let err = validate_creation(discount, future, voucher_type, now).unwrap_err();
                assert!(matches!(err, VoucherError::NegativeDiscount(d) if d == discount));
            }
        }
    }

    #[test]
    fn test_percent_range() {
        let now = Utc::now();
        let future = now + Duration::days(1);

        for discount in [101, 150, i32::MAX] {
            let err = validate_creation(discount, future, VoucherType::Percent, now).unwrap_err();
            assert!(matches!(err, VoucherError::OutRangedDiscount(_)));
        }
        for discount in [1, 50, 100] {
            assert!(validate_creation(discount, future, VoucherType::Percent, now).is_ok());
        }
    }

    #[test]
    fn test_fixed_has_no_upper_bound() {
        let now = Utc::now();
        let future = now + Duration::days(1);

        for discount in [1, 101, 5_000, i32::MAX] {
            assert!(validate_creation(discount, future, VoucherType::Fixed, now).is_ok());
        }
    }

    #[test]
    fn test_expiration_must_be_strictly_after_now() {
        let now = Utc::now();

        let err = validate_creation(10, now, VoucherType::Fixed, now).unwrap_err();
        assert!(matches!(err, VoucherError::InvalidExpiration(_)));

        let err = validate_creation(10, now - Duration::days(1), VoucherType::Fixed, now)
            .unwrap_err();
        assert!(matches!(err, VoucherError::InvalidExpiration(_)));

        assert!(
            validate_creation(10, now + Duration::milliseconds(1), VoucherType::Fixed, now)
                .is_ok()
        );
    }

    #[test]
    fn test_error_precedence() {
        let now = Utc::now();
        let past = now - Duration::days(1);

        // 负折扣优先于过期时间
        let err = validate_creation(-1, past, VoucherType::Fixed, now).unwrap_err();
        assert!(matches!(err, VoucherError::NegativeDiscount(-1)));

        // 范围优先于过期时间
        let err = validate_creation(150, past, VoucherType::Percent, now).unwrap_err();
        assert!(matches!(err, VoucherError::OutRangedDiscount(150)));
    }

    #[tokio::test]
    async fn test_create_persists_issued_voucher() {
        let expired_at = Utc::now() + Duration::days(30);
        let stored_at = truncate_expiration(expired_at);
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_save()
            .withf(move |voucher| {
                voucher.discount == 50
                    && voucher.voucher_type == VoucherType::Percent
                    && voucher.status == VoucherStatus::Issued
                    && voucher.expired_at == stored_at
            })
            .times(1)
            .returning(|voucher| Ok(voucher.clone()));

        let service = VoucherService::new(Arc::new(repo));
        service
            .create(request(50, expired_at, VoucherType::Percent))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_saves_expiration_at_microsecond_precision() {
        let expired_at = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap()
            + Duration::nanoseconds(123_456_789);
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_save()
            .withf(|voucher| voucher.expired_at.timestamp_subsec_nanos() == 123_456_000)
            .times(1)
            .returning(|voucher| Ok(voucher.clone()));

        let service = VoucherService::new(Arc::new(repo));
        service
            .create(request(30, expired_at, VoucherType::Percent))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_rejected_without_touching_repository() {
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_save().never();
        let service = VoucherService::new(Arc::new(repo));

        let err = service
            .create(request(150, Utc::now() + Duration::days(30), VoucherType::Percent))
            .await
            .unwrap_err();
        assert!(matches!(err, VoucherError::OutRangedDiscount(150)));

        let err = service
            .create(request(5_000, Utc::now() - Duration::days(1), VoucherType::Fixed))
            .await
            .unwrap_err();
        assert!(matches!(err, VoucherError::InvalidExpiration(_)));

        let err = service
            .create(request(-1, Utc::now() + Duration::days(1), VoucherType::Fixed))
            .await
            .unwrap_err();
        assert!(matches!(err, VoucherError::NegativeDiscount(-1)));
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_save()
            .returning(|_| Err(VoucherError::Database(sqlx::Error::PoolTimedOut)));
        let service = VoucherService::new(Arc::new(repo));

        let err = service
            .create(request(10, Utc::now() + Duration::days(1), VoucherType::Fixed))
            .await
            .unwrap_err();
        assert!(matches!(err, VoucherError::Database(_)));
    }

    #[tokio::test]
    async fn test_find_all_maps_to_summaries() {
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![stored_voucher()]));
        let service = VoucherService::new(Arc::new(repo));

        let summaries = service.find_all().await.unwrap();
        assert_eq!(
            summaries,
            vec!["5f1c7a52-2d7e-4f0b-8a43-9c1e2b7d6a01|1000|FIXED|2031-03-01T09:30:00Z|ISSUED"]
        );
    }

    #[tokio::test]
    async fn test_search_delegates_filters() {
        let voucher = stored_voucher();
        let expired_at = voucher.expired_at;
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_find_all_by_condition()
            .with(eq(Some(VoucherType::Fixed)), eq(Some(expired_at)))
            .times(1)
            .returning(move |_, _| Ok(vec![voucher.clone()]));
        let service = VoucherService::new(Arc::new(repo));

        let summaries = service
            .search_all_by_condition(Some(VoucherType::Fixed), Some(expired_at))
            .await
            .unwrap();
        assert_eq!(summaries, vec![stored_voucher().to_summary()]);
    }

    #[tokio::test]
    async fn test_search_without_filters_is_empty() {
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_find_all_by_condition()
            .with(eq(None), eq(None))
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_find_all().never();
        let service = VoucherService::new(Arc::new(repo));

        assert!(
            service
                .search_all_by_condition(None, None)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let voucher = stored_voucher();
        let id = voucher.id;
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(voucher.clone())));
        let service = VoucherService::new(Arc::new(repo));

        let response = service.find_by_id(id).await.unwrap();
        assert_eq!(response.discount, 1000);
        assert_eq!(response.voucher_type, VoucherType::Fixed);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = VoucherService::new(Arc::new(repo));

        let err = service.find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_absent_id_does_not_delete() {
        let id = Uuid::new_v4();
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_is_not_exists_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_delete_by_id().never();
        let service = VoucherService::new(Arc::new(repo));

        let err = service.delete_by_id(id).await.unwrap_err();
        assert!(matches!(err, VoucherError::VoucherNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_existing_id() {
        let id = Uuid::new_v4();
        let mut repo = MockVoucherRepositoryTrait::new();
        repo.expect_is_not_exists_by_id()
            .with(eq(id))
            .returning(|_| Ok(false));
        repo.expect_delete_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));
        let service = VoucherService::new(Arc::new(repo));

        service.delete_by_id(id).await.unwrap();
    }
}
