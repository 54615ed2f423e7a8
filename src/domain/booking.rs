//! Booking entity and status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Booking status label.
///
/// No transition rules are enforced; any status may be set at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Stable string form used for persistence and wire formats
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl From<&str> for BookingStatus {
    /// Stored values are constrained by the schema; anything else maps to
    /// pending.
    fn from(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking domain entity.
///
/// References both parties by id; the store's restrict rules keep either
/// user from being deleted while the booking exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub family_user_id: Uuid,
    pub caregiver_user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Booking creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub family_user_id: Uuid,
    pub caregiver_user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

/// Booking response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub family_user_id: Uuid,
    pub caregiver_user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            family_user_id: booking.family_user_id,
            caregiver_user_id: booking.caregiver_user_id,
            start_time: booking.start_time,
            end_time: booking.end_time,
            notes: booking.notes,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
