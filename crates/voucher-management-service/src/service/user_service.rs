//! 用户服务
//!
//! 用户记录的 CRUD，以及只读的黑名单查询

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{Result, VoucherError};
use crate::repository::{BlackListRepositoryTrait, UserRepositoryTrait};
use crate::service::dto::UserResponse;

/// 用户名最大长度（字符数）
pub const MAX_USER_NAME_LENGTH: usize = 50;

/// 用户服务
pub struct UserService<
    R: ?Sized = dyn UserRepositoryTrait,
    B: ?Sized = dyn BlackListRepositoryTrait,
> {
    repo: Arc<R>,
    blacklist: Arc<B>,
}

impl<R, B> UserService<R, B>
where
    R: UserRepositoryTrait + ?Sized,
    B: BlackListRepositoryTrait + ?Sized,
{
    pub fn new(repo: Arc<R>, blacklist: Arc<B>) -> Self {
        Self { repo, blacklist }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<UserResponse>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<UserResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or(VoucherError::UserNotFound(id))
    }

    /// 黑名单用户名
    #[instrument(skip(self))]
    pub async fn find_all_black(&self) -> Result<Vec<String>> {
        self.blacklist.find_all_black().await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Uuid> {
        validate_name(name)?;
        let id = self.repo.save(name).await?;
        info!(user_id = %id, "用户已创建");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: Uuid, name: &str) -> Result<()> {
        validate_name(name)?;
        self.ensure_exists(id).await?;
        self.repo.update(id, name).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.ensure_exists(id).await?;
        self.repo.delete_by_id(id).await?;
        info!(user_id = %id, "用户已删除");
        Ok(())
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<()> {
        if self.repo.is_not_exists_by_id(id).await? {
            return Err(VoucherError::UserNotFound(id));
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let length = name.trim().chars().count();
    if length == 0 || length > MAX_USER_NAME_LENGTH {
        return Err(VoucherError::Validation(format!(
            "用户名长度必须在 1 到 {} 个字符之间",
            MAX_USER_NAME_LENGTH
        )));
    }
    Ok(())
}
