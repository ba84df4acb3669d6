//! 黑名单仓储

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::render;
use super::schema::blacklist;
use super::statement::Statement;
use super::traits::BlackListRepositoryTrait;
use crate::error::{Result, VoucherError};

/// 黑名单仓储
pub struct BlackListRepository {
    pool: PgPool,
}

impl BlackListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlackListRepositoryTrait for BlackListRepository {
    async fn find_all_black(&self) -> Result<Vec<String>> {
        let rendered = render(&Statement::select_from(blacklist::TABLE, &[blacklist::NAME]))?;

        let rows = sqlx::query(rendered.sql()).fetch_all(&self.pool).await?;
        rendered.executed();

        rows.iter()
            .map(|row| {
                row.try_get(blacklist::NAME.name()).map_err(|e| {
                    VoucherError::RowMapping(format!(
                        "列 {} 解码失败: {}",
                        blacklist::NAME.name(),
                        e
                    ))
                })
            })
            .collect()
    }
}
