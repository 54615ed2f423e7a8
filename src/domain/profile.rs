//! Caregiver profile entity and payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::service::ServiceResponse;

/// Caregiver profile domain entity.
///
/// Exactly one per user; removed together with its user. The hourly rate is
/// a money-like value and is always persisted with two fractional digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub user_id: uuid::Uuid,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub years_of_experience: Option<i32>,
    pub languages: Option<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Profile create/update payload.
///
/// Verification is administrative and cannot be set through this payload.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpsertProfile {
    #[schema(example = "Experienced nanny and certified first-aider.")]
    pub bio: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub profile_image_url: Option<String>,
    /// Hourly rate; rounded to two decimal places before persistence
    #[schema(value_type = Option<f64>, example = 199.5)]
    pub hourly_rate: Option<Decimal>,
    #[validate(range(min = 0, max = 80, message = "Years of experience out of range"))]
    pub years_of_experience: Option<i32>,
    #[schema(example = "Norwegian, English")]
    pub languages: Option<String>,
}

/// Profile response with the services it offers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub user_id: uuid::Uuid,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub hourly_rate: Option<Decimal>,
    pub years_of_experience: Option<i32>,
    pub languages: Option<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub services: Vec<ServiceResponse>,
}

impl ProfileResponse {
    pub fn new(profile: Profile, services: Vec<ServiceResponse>) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            bio: profile.bio,
            profile_image_url: profile.profile_image_url,
            hourly_rate: profile.hourly_rate,
            years_of_experience: profile.years_of_experience,
            languages: profile.languages,
            is_verified: profile.is_verified,
            verified_at: profile.verified_at,
            services,
        }
    }
}
