use intake_types::{Answers, DefinitionOf, Question, Selection, Step, Survey, SurveyDefinition, SurveyKind};
use serde::{Deserialize, Serialize};

use crate::options::{IMPORTANCE_SCALE, YES, YES_NO};

pub const PRIMARY_REASONS: &[&str] = &[
    "Looking to buy a property",
    "Looking to rent a property",
    "Looking to sell a property",
    "Looking to rent out a property",
    "Looking for a home service (e.g., electrician, plumber, mover)",
    "Just browsing/researching",
    "Other",
];

pub const SEARCH_FREQUENCIES: &[&str] = &[
    "Daily",
    "A few times a week",
    "Once a week",
    "A few times a month",
    "Less than once a month",
];

pub const IMPORTANT_FILTERS: &[&str] = &[
    "Location",
    "Price range",
    "Property type (e.g., apartment, house, land)",
    "Number of bedrooms/bathrooms",
    "Amenities (e.g., swimming pool, gym)",
    "Property status (e.g., for sale, for rent)",
    "Property size",
];

pub const MAIN_CHALLENGES: &[&str] = &[
    "Difficulty verifying their credibility/reviews",
    "Trouble finding available providers",
    "Unclear pricing",
    "Poor communication",
    "Lack of variety/options",
    "Other",
];

pub const COMMUNICATION_METHODS: &[&str] = &[
    "Contact forms",
    "In-site messaging",
    "Direct phone call",
    "WhatsApp/SMS integration",
    "Email",
];

const CURRENT_PLATFORMS_PLACEHOLDER: &str =
    "e.g., PropertyPro.ng, Jumia House, Nigeria Property Centre (NPC), Jiji.ng, etc.";

/// Single-value fields of the property buyers & renters survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSingle {
    PrimaryReason,
    SearchFrequency,
    StruggledWithProviders,
    SinglePlatformUseful,
    MobileImportance,
    CurrentPlatforms,
}

/// Multi-select fields of the property buyers & renters survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMulti {
    ImportantFilters,
    MainChallenges,
    PreferredCommunication,
    /// Part of the stored row but not asked on any step.
    UsefulFeatures,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAnswers {
    pub primary_reason: String,
    pub search_frequency: String,
    pub important_filters: Selection,
    pub struggled_with_providers: String,
    pub main_challenges: Selection,
    pub single_platform_useful: String,
    pub mobile_importance: String,
    pub preferred_communication: Selection,
    pub useful_features: Selection,
    pub current_platforms: String,
}

impl Answers for UserAnswers {
    type Single = UserSingle;
    type Multi = UserMulti;

    fn single(&self, field: UserSingle) -> &str {
        match field {
            UserSingle::PrimaryReason => &self.primary_reason,
            UserSingle::SearchFrequency => &self.search_frequency,
            UserSingle::StruggledWithProviders => &self.struggled_with_providers,
            UserSingle::SinglePlatformUseful => &self.single_platform_useful,
            UserSingle::MobileImportance => &self.mobile_importance,
            UserSingle::CurrentPlatforms => &self.current_platforms,
        }
    }

    fn single_mut(&mut self, field: UserSingle) -> &mut String {
        match field {
            UserSingle::PrimaryReason => &mut self.primary_reason,
            UserSingle::SearchFrequency => &mut self.search_frequency,
            UserSingle::StruggledWithProviders => &mut self.struggled_with_providers,
            UserSingle::SinglePlatformUseful => &mut self.single_platform_useful,
            UserSingle::MobileImportance => &mut self.mobile_importance,
            UserSingle::CurrentPlatforms => &mut self.current_platforms,
        }
    }

    fn multi(&self, field: UserMulti) -> &Selection {
        match field {
            UserMulti::ImportantFilters => &self.important_filters,
            UserMulti::MainChallenges => &self.main_challenges,
            UserMulti::PreferredCommunication => &self.preferred_communication,
            UserMulti::UsefulFeatures => &self.useful_features,
        }
    }

    fn multi_mut(&mut self, field: UserMulti) -> &mut Selection {
        match field {
            UserMulti::ImportantFilters => &mut self.important_filters,
            UserMulti::MainChallenges => &mut self.main_challenges,
            UserMulti::PreferredCommunication => &mut self.preferred_communication,
            UserMulti::UsefulFeatures => &mut self.useful_features,
        }
    }
}

/// A row of the `user_surveys` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSurveyRow {
    pub primary_reason: Option<String>,
    pub search_frequency: Option<String>,
    pub important_filters: Option<Vec<String>>,
    pub struggled_with_providers: Option<String>,
    pub main_challenges: Option<Vec<String>>,
    pub single_platform_useful: Option<String>,
    pub mobile_importance: Option<String>,
    pub preferred_communication: Option<Vec<String>>,
    pub useful_features: Option<Vec<String>>,
    pub current_platforms: Option<String>,
}

/// Property buyers & renters survey, five steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSurvey;

impl Survey for UserSurvey {
    const KIND: SurveyKind = SurveyKind::User;

    type Answers = UserAnswers;
    type Row = UserSurveyRow;

    fn definition() -> DefinitionOf<UserAnswers> {
        SurveyDefinition::new(
            "Property Buyers & Renters Survey",
            vec![
                Step::new(vec![
                    Question::single(
                        "What is your primary reason for visiting a real estate or home services website today?",
                        UserSingle::PrimaryReason,
                        PRIMARY_REASONS,
                    ),
                    Question::single(
                        "How often do you typically search for properties or home services online?",
                        UserSingle::SearchFrequency,
                        SEARCH_FREQUENCIES,
                    ),
                ]),
                Step::new(vec![Question::multi(
                    "When searching for properties online, which of these filters are most important to you? (Select all that apply)",
                    UserMulti::ImportantFilters,
                    IMPORTANT_FILTERS,
                )]),
                Step::new(vec![
                    Question::single(
                        "Have you ever struggled to find reliable or verified service providers for your home needs?",
                        UserSingle::StruggledWithProviders,
                        YES_NO,
                    ),
                    Question::multi(
                        "What were the main challenges? (Select all that apply)",
                        UserMulti::MainChallenges,
                        MAIN_CHALLENGES,
                    )
                    .shown_when(UserSingle::StruggledWithProviders, YES),
                ]),
                Step::new(vec![
                    Question::single(
                        "Would you find it useful to have a single platform where you can search for both properties and verified home service providers?",
                        UserSingle::SinglePlatformUseful,
                        YES_NO,
                    ),
                    Question::single(
                        "How important is it for you that a real estate/services website is mobile-responsive and easy to use on your phone?",
                        UserSingle::MobileImportance,
                        IMPORTANCE_SCALE,
                    ),
                ]),
                Step::new(vec![
                    Question::multi(
                        "What communication methods do you prefer when contacting a property owner/agent or service provider? (Select all that apply)",
                        UserMulti::PreferredCommunication,
                        COMMUNICATION_METHODS,
                    ),
                    Question::text(
                        "Do you currently use any other platforms for property search or home services in Nigeria? Please specify which ones and what you like/dislike about them.",
                        UserSingle::CurrentPlatforms,
                        Some(CURRENT_PLATFORMS_PLACEHOLDER),
                    ),
                ]),
            ],
        )
    }

    fn row(answers: &UserAnswers) -> UserSurveyRow {
        UserSurveyRow {
            primary_reason: Some(answers.primary_reason.clone()),
            search_frequency: Some(answers.search_frequency.clone()),
            important_filters: Some(answers.important_filters.clone().into_vec()),
            struggled_with_providers: Some(answers.struggled_with_providers.clone()),
            main_challenges: Some(answers.main_challenges.clone().into_vec()),
            single_platform_useful: Some(answers.single_platform_useful.clone()),
            mobile_importance: Some(answers.mobile_importance.clone()),
            preferred_communication: Some(answers.preferred_communication.clone().into_vec()),
            useful_features: Some(answers.useful_features.clone().into_vec()),
            current_platforms: Some(answers.current_platforms.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_steps_with_expected_option_counts() {
        let definition = UserSurvey::definition();
        assert_eq!(definition.total_steps(), 5);

        let counts: Vec<Vec<usize>> = definition
            .steps
            .iter()
            .map(|step| step.questions().iter().map(|q| q.options().len()).collect())
            .collect();
        assert_eq!(
            counts,
            vec![vec![7, 5], vec![7], vec![2, 6], vec![2, 5], vec![5, 0]]
        );
    }

    #[test]
    fn main_challenges_is_the_only_conditional_question() {
        let definition = UserSurvey::definition();
        let conditional: Vec<_> = definition
            .questions()
            .filter(|q| q.condition().is_some())
            .collect();
        assert_eq!(conditional.len(), 1);
        assert!(conditional[0].ask().starts_with("What were the main challenges?"));
    }

    #[test]
    fn main_challenges_visible_only_after_yes() {
        let definition = UserSurvey::definition();
        let challenges = &definition.step(3).unwrap().questions()[1];
        let mut answers = UserAnswers::default();

        assert!(!challenges.is_visible(&answers));
        answers.set(UserSingle::StruggledWithProviders, "Yes");
        assert!(challenges.is_visible(&answers));
        answers.set(UserSingle::StruggledWithProviders, "No");
        assert!(!challenges.is_visible(&answers));
    }

    #[test]
    fn row_uses_snake_case_column_names() {
        let mut answers = UserAnswers::default();
        answers.set(UserSingle::PrimaryReason, "Other");
        answers.toggle(UserMulti::ImportantFilters, "Location", true);

        let json = serde_json::to_value(UserSurvey::row(&answers)).unwrap();
        assert_eq!(json["primary_reason"], "Other");
        assert_eq!(json["important_filters"][0], "Location");
        assert_eq!(json["current_platforms"], "");
        assert_eq!(json["useful_features"], serde_json::json!([]));
    }
}
