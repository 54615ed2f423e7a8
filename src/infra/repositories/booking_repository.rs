//! Booking repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::domain::{Booking, BookingStatus, CreateBooking};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booking repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>>;

    /// All bookings a user takes part in, on either side, ordered by id
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>>;

    /// Create a new booking in the given status
    async fn create(&self, data: CreateBooking, status: BookingStatus) -> AppResult<Booking>;

    /// Replace the status label of a booking
    async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking>;
}

/// Concrete implementation of BookingRepository
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>> {
        let result = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Booking::from))
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .filter(
                Condition::any()
                    .add(booking::Column::FamilyUserId.eq(user_id))
                    .add(booking::Column::CaregiverUserId.eq(user_id)),
            )
            .order_by_asc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn create(&self, data: CreateBooking, status: BookingStatus) -> AppResult<Booking> {
        let active = ActiveModel {
            family_user_id: Set(data.family_user_id),
            caregiver_user_id: Set(data.caregiver_user_id),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            notes: Set(data.notes),
            status: Set(status.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(None),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::BadRequest("Unknown family or caregiver user".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(Booking::from(model))
    }

    async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        let model = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Some(chrono::Utc::now()));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Booking::from(model))
    }
}
