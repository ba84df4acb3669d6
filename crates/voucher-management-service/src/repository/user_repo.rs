//! 用户仓储

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::render;
use super::schema::users;
use super::statement::Statement;
use super::traits::UserRepositoryTrait;
use crate::error::{Result, VoucherError};
use crate::models::User;

/// 用户仓储
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save(&self, name: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let rendered = render(&Statement::insert_into(users::TABLE, &users::ALL))?;

        sqlx::query(rendered.sql())
            .bind(id.to_string())
            .bind(name)
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rendered = render(&Statement::select_from(users::TABLE, &users::ALL))?;

        let rows = sqlx::query(rendered.sql()).fetch_all(&self.pool).await?;
        rendered.executed();
        rows.iter().map(map_user).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let rendered =
            render(&Statement::select_from(users::TABLE, &users::ALL).where_eq(users::ID))?;

        let row = sqlx::query(rendered.sql())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        rendered.executed();

        row.as_ref().map(map_user).transpose()
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<()> {
        let rendered =
            render(&Statement::update(users::TABLE, &[users::NAME]).where_eq(users::ID))?;

        sqlx::query(rendered.sql())
            .bind(name)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let rendered = render(&Statement::delete_from(users::TABLE).where_eq(users::ID))?;

        sqlx::query(rendered.sql())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        rendered.executed();

        Ok(())
    }

    async fn is_not_exists_by_id(&self, id: Uuid) -> Result<bool> {
        let rendered = render(
            &Statement::select_from(users::TABLE, &[users::ID])
                .where_eq(users::ID)
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

fn map_user(row: &PgRow) -> Result<User> {
    let id: String = row
        .try_get(users::ID.name())
        .map_err(|e| VoucherError::RowMapping(e.to_string()))?;
    let name: String = row
        .try_get(users::NAME.name())
        .map_err(|e| VoucherError::RowMapping(e.to_string()))?;

    let id = Uuid::parse_str(&id)
        .map_err(|e| VoucherError::RowMapping(format!("无效的用户 ID {:?}: {}", id, e)))?;

    Ok(User::new(id, name))
}
