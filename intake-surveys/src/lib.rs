//! The three questionnaires of survey-intake.
//!
//! Each survey is a unit struct implementing [`intake_types::Survey`] with a
//! fixed step inventory, an answers struct and the row shape stored in its
//! collection.

pub mod options;
pub mod pages;
pub mod real_estate;
pub mod service_provider;
pub mod user;

// Re-export user types
pub use user::{UserAnswers, UserMulti, UserSingle, UserSurvey, UserSurveyRow};

// Re-export service_provider types
pub use service_provider::{
    ProviderAnswers, ProviderMulti, ProviderSingle, ServiceProviderSurvey,
    ServiceProviderSurveyRow,
};

// Re-export real_estate types
pub use real_estate::{
    RealEstateAnswers, RealEstateMulti, RealEstateSingle, RealEstateSurvey, RealEstateSurveyRow,
};
