//! Caregiver profile and service handlers.
//!
//! Profile routes are mounted under `/users` since a profile is addressed
//! by its owner; service updates are addressed by service id under
//! `/services`.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AddService, ProfileResponse, ServiceResponse, UpdateService, UpsertProfile};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create profile routes (mounted under /users)
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/:id/profile",
            get(get_profile).put(upsert_profile).delete(delete_profile),
        )
        .route("/:id/profile/verify", post(verify_profile))
        .route("/:id/profile/services", post(add_service))
}

/// Create service routes (mounted under /services)
pub fn service_routes() -> Router<AppState> {
    Router::new().route("/:id", put(update_service))
}

/// Get a user's profile with its services
#[utoipa::path(
    get,
    path = "/users/{id}/profile",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The profile", body = ProfileResponse),
        (status = 404, description = "User has no profile")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProfileResponse>> {
    let (profile, services) = state.profile_service.get_profile(id).await?;

    let services = services.into_iter().map(ServiceResponse::from).collect();
    Ok(Json(ProfileResponse::new(profile, services)))
}

/// Create or replace a user's profile
#[utoipa::path(
    put,
    path = "/users/{id}/profile",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpsertProfile,
    responses(
        (status = 200, description = "The stored profile", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No such user")
    )
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpsertProfile>,
) -> AppResult<Json<ProfileResponse>> {
    state.profile_service.upsert_profile(id, payload).await?;

    // Re-read so the response carries the services alongside the profile
    let (profile, services) = state.profile_service.get_profile(id).await?;
    let services = services.into_iter().map(ServiceResponse::from).collect();
    Ok(Json(ProfileResponse::new(profile, services)))
}

/// Administratively verify a user's profile
#[utoipa::path(
    post,
    path = "/users/{id}/profile/verify",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The verified profile", body = ProfileResponse),
        (status = 404, description = "User has no profile")
    )
)]
pub async fn verify_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProfileResponse>> {
    state.profile_service.verify_profile(id).await?;

    let (profile, services) = state.profile_service.get_profile(id).await?;
    let services = services.into_iter().map(ServiceResponse::from).collect();
    Ok(Json(ProfileResponse::new(profile, services)))
}

/// Delete a user's profile
#[utoipa::path(
    delete,
    path = "/users/{id}/profile",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "User has no profile")
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.profile_service.delete_profile(id).await?;
    Ok(NoContent)
}

/// Attach a service to a user's profile
#[utoipa::path(
    post,
    path = "/users/{id}/profile/services",
    tag = "Profiles",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = AddService,
    responses(
        (status = 201, description = "Service attached", body = ServiceResponse),
        (status = 404, description = "User has no profile")
    )
)]
pub async fn add_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AddService>,
) -> AppResult<Created<ServiceResponse>> {
    let service = state.profile_service.add_service(id, payload).await?;
    Ok(Created(ServiceResponse::from(service)))
}

/// Update a service's description or active flag
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Updated service", body = ServiceResponse),
        (status = 404, description = "No such service")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateService>,
) -> AppResult<Json<ServiceResponse>> {
    let service = state.profile_service.update_service(id, payload).await?;
    Ok(Json(ServiceResponse::from(service)))
}
