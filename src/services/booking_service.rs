//! Booking service - Handles booking business logic.
//!
//! Status carries no transition rules; any of the four labels may replace
//! any other at any time.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Booking, BookingStatus, CreateBooking};
use crate::errors::{AppError, AppResult};
use crate::infra::BookingRepository;

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Create a booking in pending status
    async fn create_booking(&self, data: CreateBooking) -> AppResult<Booking>;

    /// Get booking by ID
    async fn get_booking(&self, id: i32) -> AppResult<Booking>;

    /// All bookings a user takes part in, on either side
    async fn list_bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>>;

    /// Replace the status label of a booking
    async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking>;
}

/// Concrete implementation of BookingService using repository.
pub struct BookingManager {
    repo: Arc<dyn BookingRepository>,
}

impl BookingManager {
    /// Create new booking service instance with repository
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BookingService for BookingManager {
    async fn create_booking(&self, data: CreateBooking) -> AppResult<Booking> {
        if data.start_time >= data.end_time {
            return Err(AppError::validation("Booking must end after it starts"));
        }

        self.repo.create(data, BookingStatus::Pending).await
    }

    async fn get_booking(&self, id: i32) -> AppResult<Booking> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_bookings_for_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        self.repo.list_for_user(user_id).await
    }

    async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        self.repo.update_status(id, status).await
    }
}
