//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod booking_repository;
mod caregiver_repository;
pub(crate) mod entities;
mod profile_repository;
mod review_repository;
mod user_repository;

pub use booking_repository::{BookingRepository, BookingStore};
pub use caregiver_repository::{CaregiverRepository, CaregiverStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use review_repository::{ReviewRepository, ReviewStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use caregiver_repository::MockCaregiverRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
