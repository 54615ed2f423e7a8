//! HTTP request handlers.

pub mod booking_handler;
pub mod caregiver_handler;
pub mod profile_handler;
pub mod review_handler;
pub mod user_handler;

pub use booking_handler::{booking_routes, user_booking_routes};
pub use caregiver_handler::caregiver_routes;
pub use profile_handler::{profile_routes, service_routes};
pub use review_handler::{review_routes, user_review_routes};
pub use user_handler::user_routes;
