//! Review service - Handles review business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{is_valid_rating, MAX_RATING, MIN_RATING};
use crate::domain::{CreateReview, Review};
use crate::errors::{AppError, AppResult};
use crate::infra::ReviewRepository;

/// Review service trait for dependency injection.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Create a review; the rating must be within bounds
    async fn create_review(&self, data: CreateReview) -> AppResult<Review>;

    /// All reviews naming the user as subject
    async fn list_reviews_for_user(&self, user_id: Uuid) -> AppResult<Vec<Review>>;
}

/// Concrete implementation of ReviewService using repository.
pub struct ReviewManager {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewManager {
    /// Create new review service instance with repository
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn create_review(&self, data: CreateReview) -> AppResult<Review> {
        if !is_valid_rating(data.rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        self.repo.create(data).await
    }

    async fn list_reviews_for_user(&self, user_id: Uuid) -> AppResult<Vec<Review>> {
        self.repo.list_for_subject(user_id).await
    }
}
