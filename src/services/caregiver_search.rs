//! Caregiver search - composes the filtered, projected caregiver listing.
//!
//! The repository restricts to caregiver-flagged users (and city, when
//! given) at the query level; everything profile-dependent is decided here
//! so that a caregiver without a profile is excluded by such filters
//! instead of failing the search.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CaregiverSearch, CaregiverSummary, Profile, ServiceType, User};
use crate::errors::AppResult;
use crate::infra::CaregiverRepository;

/// Caregiver search service trait for dependency injection.
#[async_trait]
pub trait CaregiverSearchService: Send + Sync {
    /// List caregivers satisfying every supplied filter.
    ///
    /// Read-only; results are ordered by user id.
    async fn search(&self, criteria: CaregiverSearch) -> AppResult<Vec<CaregiverSummary>>;
}

/// Concrete implementation of CaregiverSearchService
pub struct CaregiverFinder {
    repo: Arc<dyn CaregiverRepository>,
}

impl CaregiverFinder {
    /// Create new search service instance with repository
    pub fn new(repo: Arc<dyn CaregiverRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CaregiverSearchService for CaregiverFinder {
    async fn search(&self, criteria: CaregiverSearch) -> AppResult<Vec<CaregiverSummary>> {
        let candidates = self.repo.list_caregivers(criteria.city.clone()).await?;

        let matches: Vec<(User, Option<Profile>)> = candidates
            .into_iter()
            .filter(|(_, profile)| passes_profile_filters(profile.as_ref(), &criteria))
            .collect();

        // Active services for the surviving profiles, grouped per profile.
        // Duplicate categories are kept as-is.
        let profile_ids: Vec<i32> = matches
            .iter()
            .filter_map(|(_, profile)| profile.as_ref().map(|p| p.id))
            .collect();
        let services = self.repo.active_services_for_profiles(&profile_ids).await?;

        let mut categories_by_profile: HashMap<i32, Vec<ServiceType>> = HashMap::new();
        for service in services {
            categories_by_profile
                .entry(service.profile_id)
                .or_default()
                .push(service.service_type);
        }

        // The category filter only counts active services; inactive ones
        // were never fetched.
        let matches: Vec<(User, Option<Profile>)> = match criteria.service_type {
            Some(wanted) => matches
                .into_iter()
                .filter(|(_, profile)| {
                    profile.as_ref().map_or(false, |p| {
                        categories_by_profile
                            .get(&p.id)
                            .map_or(false, |categories| categories.contains(&wanted))
                    })
                })
                .collect(),
            None => matches,
        };

        let user_ids: Vec<Uuid> = matches.iter().map(|(user, _)| user.id).collect();
        let reviews = self.repo.reviews_for_subjects(&user_ids).await?;

        let mut ratings_by_user: HashMap<Uuid, (i64, u64)> = HashMap::new();
        for review in reviews {
            let entry = ratings_by_user.entry(review.reviewed_user_id).or_default();
            entry.0 += i64::from(review.rating);
            entry.1 += 1;
        }

        let summaries = matches
            .into_iter()
            .map(|(user, profile)| {
                let (sum, count) = ratings_by_user.get(&user.id).copied().unwrap_or((0, 0));
                // An unreviewed caregiver averages exactly 0, never NaN
                let average_rating = if count == 0 {
                    0.0
                } else {
                    sum as f64 / count as f64
                };

                let services = profile
                    .as_ref()
                    .and_then(|p| categories_by_profile.get(&p.id))
                    .cloned()
                    .unwrap_or_default();

                CaregiverSummary {
                    user_id: user.id,
                    full_name: user.full_name(),
                    city: user.city,
                    profile_image_url: profile.as_ref().and_then(|p| p.profile_image_url.clone()),
                    hourly_rate: profile.as_ref().and_then(|p| p.hourly_rate),
                    years_of_experience: profile.as_ref().and_then(|p| p.years_of_experience),
                    is_verified: profile.as_ref().map_or(false, |p| p.is_verified),
                    average_rating,
                    review_count: count,
                    services,
                }
            })
            .collect();

        Ok(summaries)
    }
}

/// Apply the rate and verification filters.
/// A caregiver without a profile fails any profile-dependent filter.
fn passes_profile_filters(profile: Option<&Profile>, criteria: &CaregiverSearch) -> bool {
    if let Some(max_rate) = criteria.max_hourly_rate {
        match profile.and_then(|p| p.hourly_rate) {
            Some(rate) if rate <= max_rate => {}
            _ => return false,
        }
    }

    if criteria.verified_only == Some(true) && !profile.map_or(false, |p| p.is_verified) {
        return false;
    }

    true
}
