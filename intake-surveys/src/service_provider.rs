use intake_types::{Answers, DefinitionOf, Question, Selection, Step, Survey, SurveyDefinition, SurveyKind};
use serde::{Deserialize, Serialize};

use crate::options::{IMPORTANCE_SCALE, YES_NO};

pub const SERVICE_TYPES: &[&str] = &[
    "Electrician",
    "Plumber",
    "Mover",
    "Interior Designer",
    "Painter",
    "Cleaner",
    "Landscaper",
    "Other",
];

pub const CLIENT_ACQUISITION: &[&str] = &[
    "Word-of-mouth referrals",
    "Social media (Facebook, Instagram, etc.)",
    "Online directories/marketplaces (e.g., Jiji, specialized directories)",
    "Your own website",
    "Paid advertising",
    "Other",
];

pub const BIGGEST_CHALLENGES: &[&str] = &[
    "Difficulty standing out from competitors",
    "High cost of advertising",
    "Lack of a dedicated platform",
    "Building trust with potential clients",
    "Managing inquiries efficiently",
    "Verifying client legitimacy",
];

pub const VALUABLE_FEATURES: &[&str] = &[
    "Ability to showcase your portfolio/images",
    "Customer reviews and ratings",
    "Direct contact forms/messaging from clients",
    "Availability calendar integration",
    "Option to list specific services and pricing",
    "Admin dashboard to track leads and inquiries",
    "Promotional/featured listing options",
];

pub const PAYMENT_WILLINGNESS: &[&str] = &[
    "Yes, for subscription",
    "Yes, for featured listings/boosted visibility",
    "No, I prefer free options",
    "Maybe, depends on the cost and benefits",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSingle {
    PlatformInterest,
    VerificationImportance,
    PaymentWillingness,
    MobileImportance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMulti {
    ServiceType,
    ClientAcquisition,
    BiggestChallenges,
    ValuableFeatures,
    /// Part of the stored row but not asked on any step.
    PreferredPayments,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderAnswers {
    pub service_type: Selection,
    pub client_acquisition: Selection,
    pub biggest_challenges: Selection,
    pub platform_interest: String,
    pub valuable_features: Selection,
    pub verification_importance: String,
    pub payment_willingness: String,
    pub preferred_payments: Selection,
    pub mobile_importance: String,
}

impl Answers for ProviderAnswers {
    type Single = ProviderSingle;
    type Multi = ProviderMulti;

    fn single(&self, field: ProviderSingle) -> &str {
        match field {
            ProviderSingle::PlatformInterest => &self.platform_interest,
            ProviderSingle::VerificationImportance => &self.verification_importance,
            ProviderSingle::PaymentWillingness => &self.payment_willingness,
            ProviderSingle::MobileImportance => &self.mobile_importance,
        }
    }

    fn single_mut(&mut self, field: ProviderSingle) -> &mut String {
        match field {
            ProviderSingle::PlatformInterest => &mut self.platform_interest,
            ProviderSingle::VerificationImportance => &mut self.verification_importance,
            ProviderSingle::PaymentWillingness => &mut self.payment_willingness,
            ProviderSingle::MobileImportance => &mut self.mobile_importance,
        }
    }

    fn multi(&self, field: ProviderMulti) -> &Selection {
        match field {
            ProviderMulti::ServiceType => &self.service_type,
            ProviderMulti::ClientAcquisition => &self.client_acquisition,
            ProviderMulti::BiggestChallenges => &self.biggest_challenges,
            ProviderMulti::ValuableFeatures => &self.valuable_features,
            ProviderMulti::PreferredPayments => &self.preferred_payments,
        }
    }

    fn multi_mut(&mut self, field: ProviderMulti) -> &mut Selection {
        match field {
            ProviderMulti::ServiceType => &mut self.service_type,
            ProviderMulti::ClientAcquisition => &mut self.client_acquisition,
            ProviderMulti::BiggestChallenges => &mut self.biggest_challenges,
            ProviderMulti::ValuableFeatures => &mut self.valuable_features,
            ProviderMulti::PreferredPayments => &mut self.preferred_payments,
        }
    }
}

/// A row of the `service_provider_surveys` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProviderSurveyRow {
    pub service_type: Option<Vec<String>>,
    pub client_acquisition: Option<Vec<String>>,
    pub biggest_challenges: Option<Vec<String>>,
    pub platform_interest: Option<String>,
    pub valuable_features: Option<Vec<String>>,
    pub verification_importance: Option<String>,
    pub payment_willingness: Option<String>,
    pub preferred_payments: Option<Vec<String>>,
    pub mobile_importance: Option<String>,
}

/// Service providers survey, four steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceProviderSurvey;

impl Survey for ServiceProviderSurvey {
    const KIND: SurveyKind = SurveyKind::ServiceProvider;

    type Answers = ProviderAnswers;
    type Row = ServiceProviderSurveyRow;

    fn definition() -> DefinitionOf<ProviderAnswers> {
        SurveyDefinition::new(
            "Service Providers Survey",
            vec![
                Step::new(vec![
                    Question::multi(
                        "What type of service do you provide? (Select all that apply)",
                        ProviderMulti::ServiceType,
                        SERVICE_TYPES,
                    ),
                    Question::multi(
                        "How do you currently find new clients for your services? (Select all that apply)",
                        ProviderMulti::ClientAcquisition,
                        CLIENT_ACQUISITION,
                    ),
                ]),
                Step::new(vec![
                    Question::multi(
                        "What are your biggest challenges in acquiring new clients online? (Select all that apply)",
                        ProviderMulti::BiggestChallenges,
                        BIGGEST_CHALLENGES,
                    ),
                    Question::single(
                        "Would you be interested in joining a platform that connects you directly with homeowners, tenants, and landlords seeking home-related services?",
                        ProviderSingle::PlatformInterest,
                        YES_NO,
                    ),
                ]),
                Step::new(vec![
                    Question::multi(
                        "What features would be most valuable to you on a service provider marketplace profile? (Select all that apply)",
                        ProviderMulti::ValuableFeatures,
                        VALUABLE_FEATURES,
                    ),
                    Question::single(
                        "How important is it for new service providers to be \"approved\" or verified by the platform to ensure credibility?",
                        ProviderSingle::VerificationImportance,
                        IMPORTANCE_SCALE,
                    ),
                ]),
                Step::new(vec![
                    Question::single(
                        "Would you be willing to pay a subscription fee or for featured listings to get more visibility on such a platform?",
                        ProviderSingle::PaymentWillingness,
                        PAYMENT_WILLINGNESS,
                    ),
                    Question::single(
                        "How important is it to you to have a mobile-friendly way to manage your profile and leads on the platform?",
                        ProviderSingle::MobileImportance,
                        IMPORTANCE_SCALE,
                    ),
                ]),
            ],
        )
    }

    fn row(answers: &ProviderAnswers) -> ServiceProviderSurveyRow {
        ServiceProviderSurveyRow {
            service_type: Some(answers.service_type.clone().into_vec()),
            client_acquisition: Some(answers.client_acquisition.clone().into_vec()),
            biggest_challenges: Some(answers.biggest_challenges.clone().into_vec()),
            platform_interest: Some(answers.platform_interest.clone()),
            valuable_features: Some(answers.valuable_features.clone().into_vec()),
            verification_importance: Some(answers.verification_importance.clone()),
            payment_willingness: Some(answers.payment_willingness.clone()),
            preferred_payments: Some(answers.preferred_payments.clone().into_vec()),
            mobile_importance: Some(answers.mobile_importance.clone()),
        }
    }
}
