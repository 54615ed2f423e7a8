//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    booking_handler, caregiver_handler, profile_handler, review_handler, user_handler,
};
use crate::domain::{
    AddService, BookingResponse, BookingStatus, CaregiverSummary, CreateBooking, CreateReview,
    CreateUser, ProfileResponse, ReviewResponse, ServiceResponse, ServiceType,
    UpdateBookingStatus, UpdateService, UpdateUser, UpsertProfile, UserResponse,
};

/// OpenAPI documentation for the CareConnect API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CareConnect API",
        version = "0.1.0",
        description = "Caregiver marketplace API: search caregivers, manage profiles, bookings, and reviews",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Caregiver search
        caregiver_handler::search_caregivers,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Profile endpoints
        profile_handler::get_profile,
        profile_handler::upsert_profile,
        profile_handler::verify_profile,
        profile_handler::delete_profile,
        profile_handler::add_service,
        profile_handler::update_service,
        // Booking endpoints
        booking_handler::create_booking,
        booking_handler::get_booking,
        booking_handler::update_booking_status,
        booking_handler::list_user_bookings,
        // Review endpoints
        review_handler::create_review,
        review_handler::list_user_reviews,
    ),
    components(
        schemas(
            // Domain enumerations
            ServiceType,
            BookingStatus,
            // Users
            CreateUser,
            UpdateUser,
            UserResponse,
            // Profiles and services
            UpsertProfile,
            ProfileResponse,
            AddService,
            UpdateService,
            ServiceResponse,
            // Bookings
            CreateBooking,
            UpdateBookingStatus,
            BookingResponse,
            // Reviews
            CreateReview,
            ReviewResponse,
            // Search
            CaregiverSummary,
        )
    ),
    tags(
        (name = "Caregivers", description = "Caregiver search and listing"),
        (name = "Users", description = "User management operations"),
        (name = "Profiles", description = "Caregiver profiles and offered services"),
        (name = "Bookings", description = "Bookings between families and caregivers"),
        (name = "Reviews", description = "Reviews between users")
    )
)]
pub struct ApiDoc;
