//! Read-only queries backing the caregiver search.
//!
//! The caregiver flag and city restriction are pushed into SQL; the user row
//! is fetched together with its optional profile in one left join, the
//! SeaORM equivalent of eager-loading the profile. Profile-dependent
//! filtering and rating aggregation happen in the service on top of these
//! primitives.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::{profile, review, service, user};
use crate::domain::{CareService, Profile, Review, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Caregiver search repository trait for dependency injection.
///
/// All methods are read-only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CaregiverRepository: Send + Sync {
    /// All caregiver-flagged users with their profiles, ordered by user id.
    /// When a city is given, only exact matches are returned; users without
    /// a city never match a city filter.
    async fn list_caregivers(
        &self,
        city: Option<String>,
    ) -> AppResult<Vec<(User, Option<Profile>)>>;

    /// Active services belonging to any of the given profiles
    async fn active_services_for_profiles(
        &self,
        profile_ids: &[i32],
    ) -> AppResult<Vec<CareService>>;

    /// Reviews naming any of the given users as subject
    async fn reviews_for_subjects(&self, user_ids: &[Uuid]) -> AppResult<Vec<Review>>;
}

/// Concrete implementation of CaregiverRepository
pub struct CaregiverStore {
    db: DatabaseConnection,
}

impl CaregiverStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CaregiverRepository for CaregiverStore {
    async fn list_caregivers(
        &self,
        city: Option<String>,
    ) -> AppResult<Vec<(User, Option<Profile>)>> {
        let mut query = user::Entity::find()
            .find_also_related(profile::Entity)
            .filter(user::Column::IsCaregiver.eq(true));

        if let Some(city) = city {
            query = query.filter(user::Column::City.eq(city));
        }

        let rows = query
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(u, p)| (User::from(u), p.map(Profile::from)))
            .collect())
    }

    async fn active_services_for_profiles(
        &self,
        profile_ids: &[i32],
    ) -> AppResult<Vec<CareService>> {
        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = service::Entity::find()
            .filter(service::Column::ProfileId.is_in(profile_ids.iter().copied()))
            .filter(service::Column::IsActive.eq(true))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CareService::from).collect())
    }

    async fn reviews_for_subjects(&self, user_ids: &[Uuid]) -> AppResult<Vec<Review>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = review::Entity::find()
            .filter(review::Column::ReviewedUserId.is_in(user_ids.iter().copied()))
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Review::from).collect())
    }
}
