//! Profile service - Handles caregiver profile and service management.
//!
//! The hourly rate is a money-like value: it is validated non-negative and
//! rounded to two fractional digits before anything is persisted.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::RATE_DECIMAL_PLACES;
use crate::domain::{AddService, CareService, Profile, UpdateService, UpsertProfile};
use crate::errors::{AppError, AppResult};
use crate::infra::ProfileRepository;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Get a user's profile with the services it offers
    async fn get_profile(&self, user_id: Uuid) -> AppResult<(Profile, Vec<CareService>)>;

    /// Create or replace a user's profile
    async fn upsert_profile(&self, user_id: Uuid, data: UpsertProfile) -> AppResult<Profile>;

    /// Administratively mark a user's profile as verified
    async fn verify_profile(&self, user_id: Uuid) -> AppResult<Profile>;

    /// Delete a user's profile and its services
    async fn delete_profile(&self, user_id: Uuid) -> AppResult<()>;

    /// Attach a service to a user's profile
    async fn add_service(&self, user_id: Uuid, data: AddService) -> AppResult<CareService>;

    /// Update a service's description or active flag
    async fn update_service(&self, service_id: i32, data: UpdateService) -> AppResult<CareService>;
}

/// Concrete implementation of ProfileService using repository.
pub struct ProfileManager {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileManager {
    /// Create new profile service instance with repository
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileService for ProfileManager {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<(Profile, Vec<CareService>)> {
        let profile = self
            .repo
            .find_by_user(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let services = self.repo.services_for_profile(profile.id).await?;
        Ok((profile, services))
    }

    async fn upsert_profile(&self, user_id: Uuid, mut data: UpsertProfile) -> AppResult<Profile> {
        if let Some(rate) = data.hourly_rate {
            if rate.is_sign_negative() {
                return Err(AppError::validation("Hourly rate cannot be negative"));
            }
            data.hourly_rate = Some(rate.round_dp(RATE_DECIMAL_PLACES));
        }

        self.repo.upsert(user_id, data).await
    }

    async fn verify_profile(&self, user_id: Uuid) -> AppResult<Profile> {
        self.repo.mark_verified(user_id).await
    }

    async fn delete_profile(&self, user_id: Uuid) -> AppResult<()> {
        self.repo.delete_by_user(user_id).await
    }

    async fn add_service(&self, user_id: Uuid, data: AddService) -> AppResult<CareService> {
        // Services hang off the profile, not the user
        let profile = self
            .repo
            .find_by_user(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.repo.add_service(profile.id, data).await
    }

    async fn update_service(&self, service_id: i32, data: UpdateService) -> AppResult<CareService> {
        self.repo.update_service(service_id, data).await
    }
}
