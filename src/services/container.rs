//! Service container - Centralized service construction and access.
//!
//! Builds every repository and service from one database connection so the
//! rest of the application depends on service traits only.

use std::sync::Arc;

use super::{
    BookingManager, BookingService, CaregiverFinder, CaregiverSearchService, ProfileManager,
    ProfileService, ReviewManager, ReviewService, UserManager, UserService,
};
use crate::infra::{BookingStore, CaregiverStore, ProfileStore, ReviewStore, UserStore};

/// Concrete container holding all application services
pub struct Services {
    caregiver_search: Arc<dyn CaregiverSearchService>,
    users: Arc<dyn UserService>,
    profiles: Arc<dyn ProfileService>,
    bookings: Arc<dyn BookingService>,
    reviews: Arc<dyn ReviewService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let caregiver_repo = Arc::new(CaregiverStore::new(db.clone()));
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let profile_repo = Arc::new(ProfileStore::new(db.clone()));
        let booking_repo = Arc::new(BookingStore::new(db.clone()));
        let review_repo = Arc::new(ReviewStore::new(db));

        Self {
            caregiver_search: Arc::new(CaregiverFinder::new(caregiver_repo)),
            users: Arc::new(UserManager::new(user_repo)),
            profiles: Arc::new(ProfileManager::new(profile_repo)),
            bookings: Arc::new(BookingManager::new(booking_repo)),
            reviews: Arc::new(ReviewManager::new(review_repo)),
        }
    }

    /// Get caregiver search service
    pub fn caregiver_search(&self) -> Arc<dyn CaregiverSearchService> {
        self.caregiver_search.clone()
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    /// Get profile service
    pub fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profiles.clone()
    }

    /// Get booking service
    pub fn bookings(&self) -> Arc<dyn BookingService> {
        self.bookings.clone()
    }

    /// Get review service
    pub fn reviews(&self) -> Arc<dyn ReviewService> {
        self.reviews.clone()
    }
}
