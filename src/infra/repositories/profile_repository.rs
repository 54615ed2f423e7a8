//! Profile repository implementation.
//!
//! Profiles and the services they own form one aggregate; both are managed
//! here. Services are cascade-deleted with their profile by the schema.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::{profile, service};
use crate::domain::{AddService, CareService, Profile, UpdateService, UpsertProfile};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Create or update the profile of a user.
    /// The rate is expected to already carry its final precision.
    async fn upsert(&self, user_id: Uuid, data: UpsertProfile) -> AppResult<Profile>;

    /// Mark a user's profile as verified, stamping the verification time
    async fn mark_verified(&self, user_id: Uuid) -> AppResult<Profile>;

    /// Delete a user's profile (and, through the schema, its services)
    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<()>;

    /// Attach a service to a profile
    async fn add_service(&self, profile_id: i32, data: AddService) -> AppResult<CareService>;

    /// Update a service's description or active flag
    async fn update_service(&self, service_id: i32, data: UpdateService) -> AppResult<CareService>;

    /// All services of a profile, active or not, ordered by id
    async fn services_for_profile(&self, profile_id: i32) -> AppResult<Vec<CareService>>;
}

/// Concrete implementation of ProfileRepository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let result = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Profile::from))
    }

    async fn upsert(&self, user_id: Uuid, data: UpsertProfile) -> AppResult<Profile> {
        let existing = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let model = match existing {
            Some(model) => {
                let mut active: profile::ActiveModel = model.into();
                active.bio = Set(data.bio);
                active.profile_image_url = Set(data.profile_image_url);
                active.hourly_rate = Set(data.hourly_rate);
                active.years_of_experience = Set(data.years_of_experience);
                active.languages = Set(data.languages);
                active.update(&self.db).await.map_err(AppError::from)?
            }
            None => {
                let active = profile::ActiveModel {
                    user_id: Set(user_id),
                    bio: Set(data.bio),
                    profile_image_url: Set(data.profile_image_url),
                    hourly_rate: Set(data.hourly_rate),
                    years_of_experience: Set(data.years_of_experience),
                    languages: Set(data.languages),
                    is_verified: Set(false),
                    verified_at: Set(None),
                    ..Default::default()
                };
                active.insert(&self.db).await.map_err(|e| match e.sql_err() {
                    // No such user to hang the profile on
                    Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::NotFound,
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        AppError::conflict("User already has a profile")
                    }
                    _ => AppError::from(e),
                })?
            }
        };

        Ok(Profile::from(model))
    }

    async fn mark_verified(&self, user_id: Uuid) -> AppResult<Profile> {
        let model = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: profile::ActiveModel = model.into();
        active.is_verified = Set(true);
        active.verified_at = Set(Some(chrono::Utc::now()));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Profile::from(model))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<()> {
        let result = profile::Entity::delete_many()
            .filter(profile::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn add_service(&self, profile_id: i32, data: AddService) -> AppResult<CareService> {
        let active = service::ActiveModel {
            profile_id: Set(profile_id),
            service_type: Set(data.service_type.as_str().to_string()),
            description: Set(data.description),
            is_active: Set(data.is_active),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::NotFound,
            _ => AppError::from(e),
        })?;

        Ok(CareService::from(model))
    }

    async fn update_service(&self, service_id: i32, data: UpdateService) -> AppResult<CareService> {
        let model = service::Entity::find_by_id(service_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: service::ActiveModel = model.into();

        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }
        if let Some(is_active) = data.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(CareService::from(model))
    }

    async fn services_for_profile(&self, profile_id: i32) -> AppResult<Vec<CareService>> {
        let models = service::Entity::find()
            .filter(service::Column::ProfileId.eq(profile_id))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CareService::from).collect())
    }
}
