//! 内存仓储
//!
//! 基于 DashMap 的实现，与 PostgreSQL 实现满足同一行为约定，用于测试和本地开发。

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::{DashMap, DashSet};
use uuid::Uuid;

use super::condition::SearchCondition;
use super::traits::{BlackListRepositoryTrait, UserRepositoryTrait, VoucherRepositoryTrait};
use crate::error::Result;
use crate::models::{User, Voucher, VoucherStatus, VoucherType};

/// 内存优惠券仓储
#[derive(Debug, Clone, Default)]
pub struct MemoryVoucherRepository {
    data: Arc<DashMap<Uuid, Voucher>>,
}

impl MemoryVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }
}

#[async_trait]
impl VoucherRepositoryTrait for MemoryVoucherRepository {
    async fn save(&self, voucher: &Voucher) -> Result<Voucher> {
        self.data.insert(voucher.id, voucher.clone());
        Ok(voucher.clone())
    }

    async fn find_all(&self) -> Result<Vec<Voucher>> {
        Ok(self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voucher>> {
        Ok(self.data.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all_by_condition(
        &self,
        voucher_type: Option<VoucherType>,
        expired_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Voucher>> {
        let condition = SearchCondition::from_filters(voucher_type, expired_at);
        if condition == SearchCondition::Unconstrained {
            return Ok(Vec::new());
        }

        Ok(self
            .data
            .iter()
            .filter(|entry| condition.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update_status(&self, id: Uuid, status: VoucherStatus) -> Result<()> {
        if let Some(mut entry) = self.data.get_mut(&id) {
            entry.status = status;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.data.remove(&id);
        Ok(())
    }

    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool> {
        Ok(!self.data.contains_key(&id))
    }
}

/// 内存用户仓储
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    data: Arc<DashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryUserRepository {
    async fn save(&self, name: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.data.insert(id, User::new(id, name));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.data.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<()> {
        if let Some(mut entry) = self.data.get_mut(&id) {
            entry.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.data.remove(&id);
        Ok(())
    }

    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool> {
        Ok(!self.data.contains_key(&id))
    }
}

/// 内存黑名单仓储
#[derive(Debug, Clone, Default)]
pub struct MemoryBlackListRepository {
    names: Arc<DashSet<String>>,
}

impl MemoryBlackListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定用户名初始化黑名单
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for name in names {
            repo.names.insert(name.into());
        }
        repo
    }
}

#[async_trait]
impl BlackListRepositoryTrait for MemoryBlackListRepository {
    async fn find_all_black(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.names.iter().map(|name| name.key().clone()).collect();
        names.sort();
        Ok(names)
    }
}
