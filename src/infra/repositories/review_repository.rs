//! Review repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use crate::domain::{CreateReview, Review};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Review repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Create a new review; rating bounds are validated by the caller and
    /// enforced again by the schema
    async fn create(&self, data: CreateReview) -> AppResult<Review>;

    /// All reviews naming the user as subject, ordered by id
    async fn list_for_subject(&self, user_id: Uuid) -> AppResult<Vec<Review>>;
}

/// Concrete implementation of ReviewRepository
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn create(&self, data: CreateReview) -> AppResult<Review> {
        let active = ActiveModel {
            reviewer_user_id: Set(data.reviewer_user_id),
            reviewed_user_id: Set(data.reviewed_user_id),
            booking_id: Set(data.booking_id),
            rating: Set(data.rating),
            comment: Set(data.comment),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::BadRequest("Unknown reviewer, subject, or booking".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(Review::from(model))
    }

    async fn list_for_subject(&self, user_id: Uuid) -> AppResult<Vec<Review>> {
        let models = ReviewEntity::find()
            .filter(review::Column::ReviewedUserId.eq(user_id))
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Review::from).collect())
    }
}
