//! Caregiver search unit tests.
//!
//! The repository is mocked; these tests pin down the filter conjunction,
//! the missing-profile behavior, and the rating aggregation.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use careconnect::domain::{
    CaregiverSearch, CareService, Profile, Review, ServiceType, User,
};
use careconnect::infra::repositories::MockCaregiverRepository;
use careconnect::services::{CaregiverFinder, CaregiverSearchService};

fn caregiver(id: Uuid, first: &str, last: &str, city: &str) -> User {
    User {
        id,
        email: format!("{}@example.com", first.to_lowercase()),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        date_of_birth: None,
        address: None,
        city: Some(city.to_string()),
        postal_code: None,
        is_caregiver: true,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn profile(id: i32, user_id: Uuid, rate: Option<&str>, verified: bool) -> Profile {
    Profile {
        id,
        user_id,
        bio: None,
        profile_image_url: Some(format!("https://img.example.com/{}.jpg", id)),
        hourly_rate: rate.map(|r| r.parse::<Decimal>().unwrap()),
        years_of_experience: Some(5),
        languages: Some("Norwegian, English".to_string()),
        is_verified: verified,
        verified_at: None,
    }
}

fn active_service(id: i32, profile_id: i32, service_type: ServiceType) -> CareService {
    CareService {
        id,
        profile_id,
        service_type,
        description: None,
        is_active: true,
    }
}

fn review(id: i32, subject: Uuid, rating: i32) -> Review {
    Review {
        id,
        reviewer_user_id: Uuid::new_v4(),
        reviewed_user_id: subject,
        booking_id: None,
        rating,
        comment: None,
        created_at: Utc::now(),
    }
}

fn finder(repo: MockCaregiverRepository) -> CaregiverFinder {
    CaregiverFinder::new(Arc::new(repo))
}

#[tokio::test]
async fn no_filters_returns_all_caregivers() {
    let with_profile = Uuid::new_v4();
    let without_profile = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |city| {
        assert!(city.is_none());
        Ok(vec![
            (
                caregiver(with_profile, "Anna", "Berg", "Oslo"),
                Some(profile(1, with_profile, Some("150.00"), true)),
            ),
            (caregiver(without_profile, "Bo", "Dahl", "Bergen"), None),
        ])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let results = finder(repo).search(CaregiverSearch::default()).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].user_id, with_profile);
    assert_eq!(results[1].user_id, without_profile);

    // The profile-less caregiver is projected defensively, not dropped
    assert_eq!(results[1].hourly_rate, None);
    assert!(!results[1].is_verified);
    assert!(results[1].services.is_empty());
}

#[tokio::test]
async fn city_filter_is_pushed_to_the_repository() {
    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers()
        .withf(|city| city.as_deref() == Some("Oslo"))
        .returning(|_| Ok(vec![]));
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        city: Some("Oslo".to_string()),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn supplied_filters_must_all_hold() {
    let cheap = Uuid::new_v4();
    let expensive = Uuid::new_v4();
    let unverified = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![
            (
                caregiver(cheap, "Anna", "Berg", "Oslo"),
                Some(profile(1, cheap, Some("200.00"), true)),
            ),
            (
                caregiver(expensive, "Eva", "Lund", "Oslo"),
                Some(profile(2, expensive, Some("400.00"), true)),
            ),
            (
                caregiver(unverified, "Mia", "Holm", "Oslo"),
                Some(profile(3, unverified, Some("100.00"), false)),
            ),
        ])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        max_hourly_rate: Some("250.00".parse().unwrap()),
        verified_only: Some(true),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    // Only the caregiver passing both the rate and the verification filter
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].user_id, cheap);
}

#[tokio::test]
async fn rate_bound_is_inclusive() {
    let at_limit = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![(
            caregiver(at_limit, "Anna", "Berg", "Oslo"),
            Some(profile(1, at_limit, Some("250.00"), false)),
        )])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        max_hourly_rate: Some("250.00".parse().unwrap()),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn missing_profile_fails_rate_filter_without_error() {
    let no_profile = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers()
        .returning(move |_| Ok(vec![(caregiver(no_profile, "Bo", "Dahl", "Oslo"), None)]));
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        max_hourly_rate: Some("250.00".parse().unwrap()),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn missing_profile_fails_verified_filter_without_error() {
    let no_profile = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers()
        .returning(move |_| Ok(vec![(caregiver(no_profile, "Bo", "Dahl", "Oslo"), None)]));
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        verified_only: Some(true),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn verified_only_false_applies_no_restriction() {
    let unverified = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![(
            caregiver(unverified, "Mia", "Holm", "Oslo"),
            Some(profile(1, unverified, None, false)),
        )])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        verified_only: Some(false),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn service_filter_only_counts_active_services() {
    let inactive_only = Uuid::new_v4();
    let active = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![
            (
                caregiver(inactive_only, "Carl", "Moe", "Oslo"),
                Some(profile(1, inactive_only, None, false)),
            ),
            (
                caregiver(active, "Anna", "Berg", "Oslo"),
                Some(profile(2, active, None, false)),
            ),
        ])
    });
    // The repository contract only surfaces active services, so profile 1's
    // inactive childcare service never shows up here
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![active_service(10, 2, ServiceType::Childcare)]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let criteria = CaregiverSearch {
        service_type: Some(ServiceType::Childcare),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].user_id, active);
}

#[tokio::test]
async fn zero_reviews_average_exactly_zero() {
    let id = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![(
            caregiver(id, "Anna", "Berg", "Oslo"),
            Some(profile(1, id, Some("150.00"), true)),
        )])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let results = finder(repo).search(CaregiverSearch::default()).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].average_rating, 0.0);
    assert_eq!(results[0].review_count, 0);
}

#[tokio::test]
async fn oslo_scenario_matches_with_aggregated_rating() {
    // Caregiver in Oslo, rate 200, verified, one active childcare service,
    // reviews rated 4 and 5; filter on city and max rate 250
    let id = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers()
        .withf(|city| city.as_deref() == Some("Oslo"))
        .returning(move |_| {
            Ok(vec![(
                caregiver(id, "Anna", "Berg", "Oslo"),
                Some(profile(1, id, Some("200.00"), true)),
            )])
        });
    repo.expect_active_services_for_profiles()
        .withf(|ids| ids == [1])
        .returning(|_| Ok(vec![active_service(10, 1, ServiceType::Childcare)]));
    repo.expect_reviews_for_subjects()
        .returning(move |_| Ok(vec![review(1, id, 4), review(2, id, 5)]));

    let criteria = CaregiverSearch {
        city: Some("Oslo".to_string()),
        max_hourly_rate: Some("250.00".parse().unwrap()),
        ..Default::default()
    };
    let results = finder(repo).search(criteria).await.unwrap();

    assert_eq!(results.len(), 1);
    let summary = &results[0];
    assert_eq!(summary.user_id, id);
    assert_eq!(summary.full_name, "Anna Berg");
    assert_eq!(summary.average_rating, 4.5);
    assert_eq!(summary.review_count, 2);
    assert_eq!(summary.services, vec![ServiceType::Childcare]);
    assert!(summary.is_verified);
}

#[tokio::test]
async fn duplicate_active_categories_are_preserved() {
    let id = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        Ok(vec![(
            caregiver(id, "Anna", "Berg", "Oslo"),
            Some(profile(1, id, None, false)),
        )])
    });
    repo.expect_active_services_for_profiles().returning(|_| {
        Ok(vec![
            active_service(10, 1, ServiceType::Childcare),
            active_service(11, 1, ServiceType::Childcare),
            active_service(12, 1, ServiceType::Tutoring),
        ])
    });
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let results = finder(repo).search(CaregiverSearch::default()).await.unwrap();

    assert_eq!(
        results[0].services,
        vec![
            ServiceType::Childcare,
            ServiceType::Childcare,
            ServiceType::Tutoring
        ]
    );
}

#[tokio::test]
async fn missing_names_render_as_empty_strings() {
    let id = Uuid::new_v4();

    let mut repo = MockCaregiverRepository::new();
    repo.expect_list_caregivers().returning(move |_| {
        let mut user = caregiver(id, "Anna", "Berg", "Oslo");
        user.first_name = None;
        user.last_name = Some("Berg".to_string());
        Ok(vec![(user, None)])
    });
    repo.expect_active_services_for_profiles()
        .returning(|_| Ok(vec![]));
    repo.expect_reviews_for_subjects().returning(|_| Ok(vec![]));

    let results = finder(repo).search(CaregiverSearch::default()).await.unwrap();

    assert_eq!(results[0].full_name, " Berg");
}
