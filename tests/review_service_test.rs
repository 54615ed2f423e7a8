//! Review service unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use careconnect::domain::{CreateReview, Review};
use careconnect::errors::AppError;
use careconnect::infra::repositories::MockReviewRepository;
use careconnect::services::{ReviewManager, ReviewService};

fn payload(rating: i32) -> CreateReview {
    CreateReview {
        reviewer_user_id: Uuid::new_v4(),
        reviewed_user_id: Uuid::new_v4(),
        booking_id: None,
        rating,
        comment: None,
    }
}

fn stored(data: &CreateReview) -> Review {
    Review {
        id: 1,
        reviewer_user_id: data.reviewer_user_id,
        reviewed_user_id: data.reviewed_user_id,
        booking_id: data.booking_id,
        rating: data.rating,
        comment: data.comment.clone(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn ratings_within_bounds_are_accepted() {
    for rating in [1, 3, 5] {
        let mut repo = MockReviewRepository::new();
        repo.expect_create().returning(|data| Ok(stored(&data)));

        let service = ReviewManager::new(Arc::new(repo));
        let review = service.create_review(payload(rating)).await.unwrap();
        assert_eq!(review.rating, rating);
    }
}

#[tokio::test]
async fn ratings_outside_bounds_are_rejected() {
    for rating in [0, 6, -1, 100] {
        let repo = MockReviewRepository::new();

        let service = ReviewManager::new(Arc::new(repo));
        let result = service.create_review(payload(rating)).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }
}

#[tokio::test]
async fn listing_passes_through_to_the_repository() {
    let subject = Uuid::new_v4();

    let mut repo = MockReviewRepository::new();
    repo.expect_list_for_subject()
        .withf(move |uid| *uid == subject)
        .returning(|uid| {
            let data = CreateReview {
                reviewer_user_id: Uuid::new_v4(),
                reviewed_user_id: uid,
                booking_id: None,
                rating: 4,
                comment: Some("Reliable and kind".to_string()),
            };
            Ok(vec![stored(&data)])
        });

    let service = ReviewManager::new(Arc::new(repo));
    let reviews = service.list_reviews_for_user(subject).await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewed_user_id, subject);
}
