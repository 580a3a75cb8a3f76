use intake_types::{Answers, DefinitionOf, Question, Selection, Step, Survey, SurveyDefinition, SurveyKind};
use serde::{Deserialize, Serialize};

use crate::options::{IMPORTANCE_SCALE, YES_NO};

pub const PRIMARY_ROLES: &[&str] = &[
    "Real Estate Agent",
    "Real Estate Agency",
    "Property Developer",
    "Property Manager",
    "Other",
];

pub const LISTING_METHODS: &[&str] = &[
    "Our own company website",
    "Property portals (e.g., PropertyPro.ng, Jumia House, NPC)",
    "Social media (Facebook, Instagram, etc.)",
    "Online classifieds (e.g., Jiji.ng)",
    "Offline channels (e.g., print ads, word-of-mouth)",
];

pub const BIGGEST_CHALLENGES: &[&str] = &[
    "High listing fees",
    "Limited visibility for listings",
    "Poor lead quality",
    "Difficulty managing inquiries efficiently",
    "Lack of comprehensive listing management tools",
    "Outdated platform features",
    "Poor mobile experience for clients",
];

pub const DASHBOARD_FEATURES: &[&str] = &[
    "Easy property upload with images and descriptions",
    "Tracking views and inquiries per listing",
    "Managing lead communication",
    "Ability to update property status (e.g., available, sold, rented)",
    "Analytics on listing performance",
    "Option for paid featured listings or boosted visibility",
];

pub const SUBSCRIPTION_INTEREST: &[&str] = &["Yes", "No", "Maybe, depends on the cost and benefits"];

pub const SERVICE_PROVIDERS_VALUE: &[&str] = &["Yes", "No", "Maybe, if it's integrated seamlessly"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealEstateSingle {
    PrimaryRole,
    PlatformInterest,
    CommunicationImportance,
    SubscriptionInterest,
    SeoImportance,
    ServiceProvidersValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealEstateMulti {
    ListingMethods,
    BiggestChallenges,
    ValuableFeatures,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealEstateAnswers {
    pub primary_role: String,
    pub listing_methods: Selection,
    pub biggest_challenges: Selection,
    pub platform_interest: String,
    pub valuable_features: Selection,
    pub communication_importance: String,
    pub subscription_interest: String,
    pub seo_importance: String,
    pub service_providers_value: String,
}

impl Answers for RealEstateAnswers {
    type Single = RealEstateSingle;
    type Multi = RealEstateMulti;

    fn single(&self, field: RealEstateSingle) -> &str {
        match field {
            RealEstateSingle::PrimaryRole => &self.primary_role,
            RealEstateSingle::PlatformInterest => &self.platform_interest,
            RealEstateSingle::CommunicationImportance => &self.communication_importance,
            RealEstateSingle::SubscriptionInterest => &self.subscription_interest,
            RealEstateSingle::SeoImportance => &self.seo_importance,
            RealEstateSingle::ServiceProvidersValue => &self.service_providers_value,
        }
    }

    fn single_mut(&mut self, field: RealEstateSingle) -> &mut String {
        match field {
            RealEstateSingle::PrimaryRole => &mut self.primary_role,
            RealEstateSingle::PlatformInterest => &mut self.platform_interest,
            RealEstateSingle::CommunicationImportance => &mut self.communication_importance,
            RealEstateSingle::SubscriptionInterest => &mut self.subscription_interest,
            RealEstateSingle::SeoImportance => &mut self.seo_importance,
            RealEstateSingle::ServiceProvidersValue => &mut self.service_providers_value,
        }
    }

    fn multi(&self, field: RealEstateMulti) -> &Selection {
        match field {
            RealEstateMulti::ListingMethods => &self.listing_methods,
            RealEstateMulti::BiggestChallenges => &self.biggest_challenges,
            RealEstateMulti::ValuableFeatures => &self.valuable_features,
        }
    }

    fn multi_mut(&mut self, field: RealEstateMulti) -> &mut Selection {
        match field {
            RealEstateMulti::ListingMethods => &mut self.listing_methods,
            RealEstateMulti::BiggestChallenges => &mut self.biggest_challenges,
            RealEstateMulti::ValuableFeatures => &mut self.valuable_features,
        }
    }
}

/// A row of the `real_estate_surveys` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateSurveyRow {
    pub primary_role: Option<String>,
    pub listing_methods: Option<Vec<String>>,
    pub biggest_challenges: Option<Vec<String>>,
    pub platform_interest: Option<String>,
    pub valuable_features: Option<Vec<String>>,
    pub communication_importance: Option<String>,
    pub subscription_interest: Option<String>,
    pub seo_importance: Option<String>,
    pub service_providers_value: Option<String>,
}

/// Real estate professionals survey, four steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEstateSurvey;

impl Survey for RealEstateSurvey {
    const KIND: SurveyKind = SurveyKind::RealEstate;

    type Answers = RealEstateAnswers;
    type Row = RealEstateSurveyRow;

    fn definition() -> DefinitionOf<RealEstateAnswers> {
        SurveyDefinition::new(
            "Real Estate Professionals Survey",
            vec![
                Step::new(vec![
                    Question::single(
                        "What is your primary role?",
                        RealEstateSingle::PrimaryRole,
                        PRIMARY_ROLES,
                    ),
                    Question::multi(
                        "How do you currently list and manage your properties online? (Select all that apply)",
                        RealEstateMulti::ListingMethods,
                        LISTING_METHODS,
                    ),
                ]),
                Step::new(vec![
                    Question::multi(
                        "What are the biggest challenges you face with current online property listing platforms? (Select all that apply)",
                        RealEstateMulti::BiggestChallenges,
                        BIGGEST_CHALLENGES,
                    ),
                    Question::single(
                        "Would you be interested in a platform that allows you to easily post and manage your property listings, with a focus on reaching both buyers/tenants and potentially connecting them with home service providers?",
                        RealEstateSingle::PlatformInterest,
                        YES_NO,
                    ),
                ]),
                Step::new(vec![
                    Question::multi(
                        "What features would be most valuable to you in an admin dashboard for managing listings? (Select all that apply)",
                        RealEstateMulti::ValuableFeatures,
                        DASHBOARD_FEATURES,
                    ),
                    Question::single(
                        "How important is it for you to have direct communication tools with potential clients (buyers, tenants)?",
                        RealEstateSingle::CommunicationImportance,
                        IMPORTANCE_SCALE,
                    ),
                ]),
                Step::new(vec![
                    Question::single(
                        "Are you interested in subscription options that offer unlimited listings or advanced features?",
                        RealEstateSingle::SubscriptionInterest,
                        SUBSCRIPTION_INTEREST,
                    ),
                    Question::single(
                        "How important is it that the platform has strong SEO capabilities to ensure your listings are easily found on search engines?",
                        RealEstateSingle::SeoImportance,
                        IMPORTANCE_SCALE,
                    ),
                    Question::single(
                        "Would you find value in a platform that also offers a directory of verified home service providers for your clients (e.g., for repairs, moving, renovations)?",
                        RealEstateSingle::ServiceProvidersValue,
                        SERVICE_PROVIDERS_VALUE,
                    ),
                ]),
            ],
        )
    }

    fn row(answers: &RealEstateAnswers) -> RealEstateSurveyRow {
        RealEstateSurveyRow {
            primary_role: Some(answers.primary_role.clone()),
            listing_methods: Some(answers.listing_methods.clone().into_vec()),
            biggest_challenges: Some(answers.biggest_challenges.clone().into_vec()),
            platform_interest: Some(answers.platform_interest.clone()),
            valuable_features: Some(answers.valuable_features.clone().into_vec()),
            communication_importance: Some(answers.communication_importance.clone()),
            subscription_interest: Some(answers.subscription_interest.clone()),
            seo_importance: Some(answers.seo_importance.clone()),
            service_providers_value: Some(answers.service_providers_value.clone()),
        }
    }
}
