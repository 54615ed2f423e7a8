//! Care service entity and the fixed category enumeration.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Service categories a caregiver can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Childcare,
    ElderlyCare,
    Tutoring,
    Housekeeping,
    PetCare,
}

impl ServiceType {
    /// All known categories
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Childcare,
        ServiceType::ElderlyCare,
        ServiceType::Tutoring,
        ServiceType::Housekeeping,
        ServiceType::PetCare,
    ];

    /// Stable string form used for persistence and wire formats
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Childcare => "childcare",
            ServiceType::ElderlyCare => "elderly_care",
            ServiceType::Tutoring => "tutoring",
            ServiceType::Housekeeping => "housekeeping",
            ServiceType::PetCare => "pet_care",
        }
    }
}

impl From<&str> for ServiceType {
    /// Stored values are constrained by the schema; anything else maps to
    /// the first category.
    fn from(s: &str) -> Self {
        match s {
            "elderly_care" => ServiceType::ElderlyCare,
            "tutoring" => ServiceType::Tutoring,
            "housekeeping" => ServiceType::Housekeeping,
            "pet_care" => ServiceType::PetCare,
            _ => ServiceType::Childcare,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Care service domain entity.
///
/// Belongs to exactly one profile; inactive services stay on record but do
/// not count as an offered category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareService {
    pub id: i32,
    pub profile_id: i32,
    pub service_type: ServiceType,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Payload for attaching a service to a profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddService {
    pub service_type: ServiceType,
    #[schema(example = "Evening babysitting for ages 3-10")]
    pub description: Option<String>,
    /// New services are offered immediately unless created inactive
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Payload for updating a service; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Service response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: i32,
    pub service_type: ServiceType,
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<CareService> for ServiceResponse {
    fn from(service: CareService) -> Self {
        Self {
            id: service.id,
            service_type: service.service_type,
            description: service.description,
            is_active: service.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_round_trips_through_str() {
        for kind in ServiceType::ALL {
            assert_eq!(ServiceType::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn service_type_serializes_snake_case() {
        let json = serde_json::to_string(&ServiceType::ElderlyCare).unwrap();
        assert_eq!(json, "\"elderly_care\"");
    }
}
