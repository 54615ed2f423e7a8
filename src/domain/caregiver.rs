//! Caregiver search criteria and result projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::service::ServiceType;

/// Search criteria for the caregiver listing.
///
/// Every field is optional; an absent field applies no restriction, and
/// supplied filters must all hold at once.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaregiverSearch {
    /// Require an active service of this category
    pub service_type: Option<ServiceType>,
    /// Exact city match
    pub city: Option<String>,
    /// Inclusive upper bound on the hourly rate
    #[param(value_type = Option<f64>)]
    pub max_hourly_rate: Option<Decimal>,
    /// When true, only verified profiles match
    pub verified_only: Option<bool>,
}

/// One caregiver in the search listing.
///
/// Aggregates the user row with its profile, active service categories, and
/// review statistics. Duplicate categories are preserved when a profile
/// carries several active services of the same type.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaregiverSummary {
    pub user_id: Uuid,
    /// First and last name, space-joined
    #[schema(example = "Anna Berg")]
    pub full_name: String,
    pub city: Option<String>,
    pub profile_image_url: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub hourly_rate: Option<Decimal>,
    pub years_of_experience: Option<i32>,
    pub is_verified: bool,
    /// Arithmetic mean of received ratings; 0.0 when there are none
    pub average_rating: f64,
    pub review_count: u64,
    pub services: Vec<ServiceType>,
}
