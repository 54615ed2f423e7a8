//! Review handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateReview, ReviewResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Create review routes (mounted under /reviews)
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/", post(create_review))
}

/// Create the user-scoped review listing (mounted under /users)
pub fn user_review_routes() -> Router<AppState> {
    Router::new().route("/:id/reviews", get(list_user_reviews))
}

/// Create a review
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Rating out of bounds or unknown reference")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReview>,
) -> AppResult<Created<ReviewResponse>> {
    let review = state.review_service.create_review(payload).await?;
    Ok(Created(ReviewResponse::from(review)))
}

/// List all reviews naming the user as subject
#[utoipa::path(
    get,
    path = "/users/{id}/reviews",
    tag = "Reviews",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Reviews about the user", body = [ReviewResponse])
    )
)]
pub async fn list_user_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    let reviews = state.review_service.list_reviews_for_user(id).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
