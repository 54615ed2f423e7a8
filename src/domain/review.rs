//! Review entity and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Review domain entity.
///
/// Written by one user about another, optionally tied to a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub reviewer_user_id: Uuid,
    pub reviewed_user_id: Uuid,
    pub booking_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub reviewer_user_id: Uuid,
    pub reviewed_user_id: Uuid,
    pub booking_id: Option<i32>,
    /// Rating from 1 to 5 inclusive
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: i32,
    pub comment: Option<String>,
}

/// Review response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i32,
    pub reviewer_user_id: Uuid,
    pub reviewed_user_id: Uuid,
    pub booking_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            reviewer_user_id: review.reviewer_user_id,
            reviewed_user_id: review.reviewed_user_id,
            booking_id: review.booking_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
