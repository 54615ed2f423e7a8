//! Infrastructure concerns: database access and repositories.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    BookingRepository, BookingStore, CaregiverRepository, CaregiverStore, ProfileRepository,
    ProfileStore, ReviewRepository, ReviewStore, UserRepository, UserStore,
};
