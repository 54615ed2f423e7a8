//! Profile service unit tests.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use careconnect::domain::{AddService, Profile, ServiceType, UpsertProfile};
use careconnect::errors::AppError;
use careconnect::infra::repositories::MockProfileRepository;
use careconnect::services::{ProfileManager, ProfileService};

fn stored_profile(user_id: Uuid, rate: Option<Decimal>) -> Profile {
    Profile {
        id: 1,
        user_id,
        bio: None,
        profile_image_url: None,
        hourly_rate: rate,
        years_of_experience: None,
        languages: None,
        is_verified: false,
        verified_at: None,
    }
}

#[tokio::test]
async fn hourly_rate_is_rounded_to_two_decimals() {
    let user_id = Uuid::new_v4();

    let mut repo = MockProfileRepository::new();
    repo.expect_upsert()
        .withf(|_, data| {
            // 19.999 rounds to 20.00 before anything is persisted
            data.hourly_rate == Some("20.00".parse::<Decimal>().unwrap())
        })
        .returning(move |uid, data| Ok(stored_profile(uid, data.hourly_rate)));

    let service = ProfileManager::new(Arc::new(repo));
    let payload = UpsertProfile {
        hourly_rate: Some("19.999".parse().unwrap()),
        ..Default::default()
    };

    let profile = service.upsert_profile(user_id, payload).await.unwrap();
    assert_eq!(profile.hourly_rate, Some("20.00".parse().unwrap()));
}

#[tokio::test]
async fn exact_rates_are_kept_unchanged() {
    let user_id = Uuid::new_v4();

    let mut repo = MockProfileRepository::new();
    repo.expect_upsert()
        .withf(|_, data| data.hourly_rate == Some("199.50".parse::<Decimal>().unwrap()))
        .returning(move |uid, data| Ok(stored_profile(uid, data.hourly_rate)));

    let service = ProfileManager::new(Arc::new(repo));
    let payload = UpsertProfile {
        hourly_rate: Some("199.50".parse().unwrap()),
        ..Default::default()
    };

    assert!(service.upsert_profile(user_id, payload).await.is_ok());
}

#[tokio::test]
async fn negative_rate_is_rejected_before_persistence() {
    let repo = MockProfileRepository::new();

    let service = ProfileManager::new(Arc::new(repo));
    let payload = UpsertProfile {
        hourly_rate: Some("-10.00".parse().unwrap()),
        ..Default::default()
    };

    let result = service.upsert_profile(Uuid::new_v4(), payload).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn absent_rate_passes_through() {
    let user_id = Uuid::new_v4();

    let mut repo = MockProfileRepository::new();
    repo.expect_upsert()
        .withf(|_, data| data.hourly_rate.is_none())
        .returning(move |uid, data| Ok(stored_profile(uid, data.hourly_rate)));

    let service = ProfileManager::new(Arc::new(repo));
    let result = service
        .upsert_profile(user_id, UpsertProfile::default())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn add_service_requires_a_profile() {
    let mut repo = MockProfileRepository::new();
    repo.expect_find_by_user().returning(|_| Ok(None));

    let service = ProfileManager::new(Arc::new(repo));
    let payload = AddService {
        service_type: ServiceType::Childcare,
        description: None,
        is_active: true,
    };

    let result = service.add_service(Uuid::new_v4(), payload).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn add_service_targets_the_owning_profile() {
    let user_id = Uuid::new_v4();

    let mut repo = MockProfileRepository::new();
    repo.expect_find_by_user()
        .returning(move |uid| Ok(Some(stored_profile(uid, None))));
    repo.expect_add_service()
        .withf(|profile_id, _| *profile_id == 1)
        .returning(|profile_id, data| {
            Ok(careconnect::domain::CareService {
                id: 7,
                profile_id,
                service_type: data.service_type,
                description: data.description,
                is_active: data.is_active,
            })
        });

    let service = ProfileManager::new(Arc::new(repo));
    let payload = AddService {
        service_type: ServiceType::PetCare,
        description: Some("Dog walking".to_string()),
        is_active: true,
    };

    let created = service.add_service(user_id, payload).await.unwrap();
    assert_eq!(created.profile_id, 1);
    assert_eq!(created.service_type, ServiceType::PetCare);
}
