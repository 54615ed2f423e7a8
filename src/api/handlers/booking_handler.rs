//! Booking handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{BookingResponse, CreateBooking, UpdateBookingStatus};
use crate::errors::AppResult;
use crate::types::Created;

/// Create booking routes (mounted under /bookings)
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/:id", get(get_booking))
        .route("/:id/status", put(update_booking_status))
}

/// Create the user-scoped booking listing (mounted under /users)
pub fn user_booking_routes() -> Router<AppState> {
    Router::new().route("/:id/bookings", get(list_user_bookings))
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created in pending status", body = BookingResponse),
        (status = 400, description = "Validation error or unknown participant")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBooking>,
) -> AppResult<Created<BookingResponse>> {
    let booking = state.booking_service.create_booking(payload).await?;
    Ok(Created(BookingResponse::from(booking)))
}

/// Get a booking by id
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = BookingResponse),
        (status = 404, description = "No such booking")
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state.booking_service.get_booking(id).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// Replace the status label of a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking id")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Updated booking", body = BookingResponse),
        (status = 404, description = "No such booking")
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBookingStatus>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state.booking_service.update_status(id, payload.status).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// List all bookings a user takes part in, on either side
#[utoipa::path(
    get,
    path = "/users/{id}/bookings",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's bookings", body = [BookingResponse])
    )
)]
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bookings = state.booking_service.list_bookings_for_user(id).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
