//! User repository implementation.
//!
//! Users are hard-deleted; the schema's restrict rules reject deletion of a
//! user still referenced by bookings or reviews, which surfaces here as a
//! conflict.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users ordered by id, one page at a time, with the total count
    async fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Create a new user
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Update user fields
    async fn update(&self, id: Uuid, data: UpdateUser) -> AppResult<User>;

    /// Delete user; fails with a conflict while bookings or reviews
    /// reference the user
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        let paginator = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            date_of_birth: Set(data.date_of_birth),
            address: Set(data.address),
            city: Set(data.city),
            postal_code: Set(data.postal_code),
            is_caregiver: Set(data.is_caregiver),
            created_at: Set(now),
            updated_at: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("A user with this email already exists")
                }
                _ => AppError::from(e),
            }
        })?;

        Ok(User::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateUser) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(first_name) = data.first_name {
            active.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = data.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(address) = data.address {
            active.address = Set(Some(address));
        }
        if let Some(city) = data.city {
            active.city = Set(Some(city));
        }
        if let Some(postal_code) = data.postal_code {
            active.postal_code = Set(Some(postal_code));
        }
        if let Some(is_caregiver) = data.is_caregiver {
            active.is_caregiver = Set(is_caregiver);
        }
        active.updated_at = Set(Some(chrono::Utc::now()));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    AppError::conflict("User is still referenced by bookings or reviews")
                }
                _ => AppError::from(e),
            }
        })?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
