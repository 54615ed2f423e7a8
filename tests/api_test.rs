//! Integration tests for the API surface.
//!
//! These tests use mock services and exercise the wire types and error
//! mapping without requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use careconnect::domain::{
    CaregiverSearch, CaregiverSummary, CreateReview, CreateUser, ServiceType,
};
use careconnect::errors::{AppError, AppResult};
use careconnect::services::CaregiverSearchService;

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock search service that returns a canned caregiver listing
struct MockSearchService;

#[async_trait]
impl CaregiverSearchService for MockSearchService {
    async fn search(&self, criteria: CaregiverSearch) -> AppResult<Vec<CaregiverSummary>> {
        // Every summary honors the supplied filters by construction
        let summary = CaregiverSummary {
            user_id: Uuid::new_v4(),
            full_name: "Anna Berg".to_string(),
            city: criteria.city.clone().or(Some("Oslo".to_string())),
            profile_image_url: None,
            hourly_rate: criteria.max_hourly_rate,
            years_of_experience: Some(5),
            is_verified: criteria.verified_only.unwrap_or(false),
            average_rating: 4.5,
            review_count: 2,
            services: criteria.service_type.map(|s| vec![s]).unwrap_or_default(),
        };
        Ok(vec![summary])
    }
}

#[tokio::test]
async fn mock_search_service_reflects_criteria() {
    let service = MockSearchService;
    let criteria = CaregiverSearch {
        service_type: Some(ServiceType::Childcare),
        city: Some("Oslo".to_string()),
        max_hourly_rate: Some("250.00".parse().unwrap()),
        verified_only: Some(true),
    };

    let results = service.search(criteria).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].city.as_deref(), Some("Oslo"));
    assert!(results[0].is_verified);
    assert_eq!(results[0].services, vec![ServiceType::Childcare]);
}

// =============================================================================
// Wire Format Tests
// =============================================================================

#[tokio::test]
async fn search_criteria_deserialize_from_json() {
    let criteria: CaregiverSearch = serde_json::from_value(serde_json::json!({
        "service_type": "elderly_care",
        "city": "Bergen",
        "max_hourly_rate": 300.0,
        "verified_only": false
    }))
    .unwrap();

    assert_eq!(criteria.service_type, Some(ServiceType::ElderlyCare));
    assert_eq!(criteria.city.as_deref(), Some("Bergen"));
    assert_eq!(criteria.max_hourly_rate, Some("300".parse().unwrap()));
    assert_eq!(criteria.verified_only, Some(false));
}

#[tokio::test]
async fn absent_criteria_fields_mean_no_filter() {
    let criteria: CaregiverSearch = serde_json::from_value(serde_json::json!({})).unwrap();

    assert_eq!(criteria, CaregiverSearch::default());
    assert!(criteria.service_type.is_none());
    assert!(criteria.city.is_none());
    assert!(criteria.max_hourly_rate.is_none());
    assert!(criteria.verified_only.is_none());
}

#[tokio::test]
async fn summary_serializes_expected_fields() {
    let summary = CaregiverSummary {
        user_id: Uuid::new_v4(),
        full_name: "Anna Berg".to_string(),
        city: Some("Oslo".to_string()),
        profile_image_url: None,
        hourly_rate: Some("200.00".parse().unwrap()),
        years_of_experience: Some(5),
        is_verified: true,
        average_rating: 0.0,
        review_count: 0,
        services: vec![ServiceType::Childcare, ServiceType::Childcare],
    };

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["full_name"], "Anna Berg");
    assert_eq!(json["average_rating"], 0.0);
    assert_eq!(json["review_count"], 0);
    // Duplicate categories survive serialization untouched
    assert_eq!(
        json["services"],
        serde_json::json!(["childcare", "childcare"])
    );
}

// =============================================================================
// Request Validation Tests
// =============================================================================

#[tokio::test]
async fn review_rating_bounds_are_validated_at_the_boundary() {
    let mut review = CreateReview {
        reviewer_user_id: Uuid::new_v4(),
        reviewed_user_id: Uuid::new_v4(),
        booking_id: None,
        rating: 6,
        comment: None,
    };
    assert!(review.validate().is_err());

    review.rating = 0;
    assert!(review.validate().is_err());

    review.rating = 5;
    assert!(review.validate().is_ok());
}

#[tokio::test]
async fn user_email_is_validated_at_the_boundary() {
    let user = CreateUser {
        email: "not-an-email".to_string(),
        first_name: None,
        last_name: None,
        date_of_birth: None,
        address: None,
        city: None,
        postal_code: None,
        is_caregiver: false,
    };

    assert!(user.validate().is_err());
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

#[tokio::test]
async fn error_variants_map_to_http_statuses() {
    use axum::response::IntoResponse;

    let cases = [
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (
            AppError::conflict("User is still referenced by bookings or reviews"),
            StatusCode::CONFLICT,
        ),
        (
            AppError::validation("Rating must be between 1 and 5"),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::internal("boom"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn database_errors_surface_as_generic_failures() {
    use axum::response::IntoResponse;

    let error = AppError::from(sea_orm::DbErr::Custom("connection refused".to_string()));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Domain Shape Tests
// =============================================================================

#[tokio::test]
async fn full_name_joins_first_and_last() {
    let user = careconnect::domain::User {
        id: Uuid::new_v4(),
        email: "anna@example.com".to_string(),
        first_name: Some("Anna".to_string()),
        last_name: Some("Berg".to_string()),
        date_of_birth: None,
        address: None,
        city: Some("Oslo".to_string()),
        postal_code: None,
        is_caregiver: true,
        created_at: Utc::now(),
        updated_at: None,
    };

    assert_eq!(user.full_name(), "Anna Berg");
}

#[tokio::test]
async fn booking_status_serializes_snake_case() {
    let json = serde_json::to_string(&careconnect::domain::BookingStatus::Confirmed).unwrap();
    assert_eq!(json, "\"confirmed\"");

    let parsed: careconnect::domain::BookingStatus =
        serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, careconnect::domain::BookingStatus::Completed);
}
