//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT_SECONDS};
use crate::infra::Database;
use crate::services::{
    BookingService, CaregiverSearchService, ProfileService, ReviewService, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Caregiver search service
    pub caregiver_search: Arc<dyn CaregiverSearchService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Profile service
    pub profile_service: Arc<dyn ProfileService>,
    /// Booking service
    pub booking_service: Arc<dyn BookingService>,
    /// Review service
    pub review_service: Arc<dyn ReviewService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Per-request timeout applied by the router
    pub request_timeout: Duration,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it builds all
    /// services through the container.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Services::from_connection(database.get_connection());

        Self {
            caregiver_search: services.caregiver_search(),
            user_service: services.users(),
            profile_service: services.profiles(),
            booking_service: services.bookings(),
            review_service: services.reviews(),
            database,
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        caregiver_search: Arc<dyn CaregiverSearchService>,
        user_service: Arc<dyn UserService>,
        profile_service: Arc<dyn ProfileService>,
        booking_service: Arc<dyn BookingService>,
        review_service: Arc<dyn ReviewService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            caregiver_search,
            user_service,
            profile_service,
            booking_service,
            review_service,
            database,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}
