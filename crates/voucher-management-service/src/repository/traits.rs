//! 仓储 Trait 定义
//!
//! 服务层依赖抽象而非具体实现，PostgreSQL 实现与内存实现满足同一行为约定

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{User, Voucher, VoucherStatus, VoucherType};

/// 优惠券仓储接口
///
/// `find_all_by_condition` 在两个过滤条件都缺省时返回空列表且不执行任何语句，
/// 这是对无条件搜索的拒绝，不能改为返回全部记录
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoucherRepositoryTrait: Send + Sync {
    /// 写入全部五个字段，原样返回
    async fn save(&self, voucher: &Voucher) -> Result<Voucher>;
    async fn find_all(&self) -> Result<Vec<Voucher>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voucher>>;
    async fn find_all_by_condition(
        &self,
        voucher_type: Option<VoucherType>,
        expired_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Voucher>>;
    async fn update_status(&self, id: Uuid, status: VoucherStatus) -> Result<()>;
    /// 不做存在性检查，由调用方负责
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// 用户仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// 生成新 ID 并写入，返回该 ID
    async fn save(&self, name: &str) -> Result<Uuid>;
    async fn find_all(&self) -> Result<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn update(&self, id: Uuid, name: &str) -> Result<()>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// 黑名单仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlackListRepositoryTrait: Send + Sync {
    /// 全部黑名单用户名，黑名单为空时返回空列表
    async fn find_all_black(&self) -> Result<Vec<String>>;
}
