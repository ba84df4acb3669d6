//! 优惠券仓储
//!
//! PostgreSQL 实现，id 以 36 位文本存储，type/status 以枚举名称存储

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::condition::SearchCondition;
use super::render;
use super::schema::vouchers;
use super::statement::Statement;
use super::traits::VoucherRepositoryTrait;
use crate::error::{Result, VoucherError};
use crate::models::{Voucher, VoucherStatus, VoucherType};

/// 优惠券仓储
pub struct VoucherRepository {
    pool: PgPool,
}

impl VoucherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepositoryTrait for VoucherRepository {
    async fn save(&self, voucher: &Voucher) -> Result<Voucher> {
        let rendered = render(&Statement::insert_into(vouchers::TABLE, &vouchers::ALL))?;

        sqlx::query(rendered.sql())
            .bind(voucher.id.to_string())
            .bind(voucher.discount)
            .bind(voucher.expired_at)
            .bind(voucher.voucher_type.as_str())
            .bind(voucher.status.as_str())
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(voucher.clone())
    }

    async fn find_all(&self) -> Result<Vec<Voucher>> {
        let rendered = render(&Statement::select_from(vouchers::TABLE, &vouchers::ALL))?;

        let rows = sqlx::query(rendered.sql()).fetch_all(&self.pool).await?;
        rendered.executed();
        rows.iter().map(map_voucher).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voucher>> {
        let rendered = render(
            &Statement::select_from(vouchers::TABLE, &vouchers::ALL).where_eq(vouchers::ID),
        )?;

        let row = sqlx::query(rendered.sql())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        rendered.executed();

        row.as_ref().map(map_voucher).transpose()
    }

    async fn find_all_by_condition(
        &self,
        voucher_type: Option<VoucherType>,
        expired_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Voucher>> {
        let condition = SearchCondition::from_filters(voucher_type, expired_at);
        let Some(statement) = condition.statement() else {
            return Ok(Vec::new());
        };
        let rendered = render(&statement)?;

        let mut query = sqlx::query(rendered.sql());
        if let Some(voucher_type) = condition.voucher_type() {
            query = query.bind(voucher_type.as_str());
        }
        if let Some(expired_at) = condition.expired_at() {
            query = query.bind(expired_at);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rendered.executed();
        rows.iter().map(map_voucher).collect()
    }

    async fn update_status(&self, id: Uuid, status: VoucherStatus) -> Result<()> {
        let rendered = render(
            &Statement::update(vouchers::TABLE, &[vouchers::STATUS]).where_eq(vouchers::ID),
        )?;

        sqlx::query(rendered.sql())
            .bind(status.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let rendered =
            render(&Statement::delete_from(vouchers::TABLE).where_eq(vouchers::ID))?;

        sqlx::query(rendered.sql())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(())
    }

    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool> {
        let rendered = render(
            &Statement::select_from(vouchers::TABLE, &[vouchers::ID])
                .where_eq(vouchers::ID)
                .limit(1),
        )?;

        let row = sqlx::query(rendered.sql())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        rendered.executed();

        Ok(row.is_none())
    }
}

/// 行映射，任何字段无法解码都视为致命错误
fn map_voucher(row: &PgRow) -> Result<Voucher> {
    let id: String = decode(row, vouchers::ID.name())?;
    let discount: i32 = decode(row, vouchers::DISCOUNT.name())?;
    let expired_at: DateTime<Utc> = decode(row, vouchers::EXPIRED_AT.name())?;
    let voucher_type: String = decode(row, vouchers::TYPE.name())?;
    let status: String = decode(row, vouchers::STATUS.name())?;

    let id = Uuid::parse_str(&id)
        .map_err(|e| VoucherError::RowMapping(format!("无效的优惠券 ID {:?}: {}", id, e)))?;
    let voucher_type = voucher_type
        .parse::<VoucherType>()
        .map_err(|e| VoucherError::RowMapping(e.to_string()))?;
    let status = status
        .parse::<VoucherStatus>()
        .map_err(|e| VoucherError::RowMapping(e.to_string()))?;

    Ok(Voucher::restore(id, discount, expired_at, voucher_type, status))
}

fn decode<'r, T>(row: &'r PgRow, column: &'static str) -> Result<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| VoucherError::RowMapping(format!("列 {} 解码失败: {}", column, e)))
}
