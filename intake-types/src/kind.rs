use std::fmt;

/// The three audience-specific questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyKind {
    /// Property buyers, renters and browsers.
    User,
    /// Electricians, plumbers, movers and other home-service providers.
    ServiceProvider,
    /// Agents, agencies, developers and property managers.
    RealEstate,
}

impl SurveyKind {
    pub const ALL: [SurveyKind; 3] = [Self::User, Self::ServiceProvider, Self::RealEstate];

    /// Name of the persistence collection rows of this kind are written to.
    pub fn collection(self) -> &'static str {
        match self {
            Self::User => "user_surveys",
            Self::ServiceProvider => "service_provider_surveys",
            Self::RealEstate => "real_estate_surveys",
        }
    }

    /// Title on the landing page card.
    pub fn title(self) -> &'static str {
        match self {
            Self::User => "Property Buyers & Renters",
            Self::ServiceProvider => "Service Providers",
            Self::RealEstate => "Real Estate Professionals",
        }
    }

    /// Description on the landing page card.
    pub fn description(self) -> &'static str {
        match self {
            Self::User => "Looking to buy, rent, or just browsing properties",
            Self::ServiceProvider => "Electricians, plumbers, movers, designers, and more",
            Self::RealEstate => "Agents, agencies, developers, and property managers",
        }
    }

    /// Label used in the dashboard's per-kind bar summary.
    pub fn chart_label(self) -> &'static str {
        match self {
            Self::User => "Users",
            Self::ServiceProvider => "Service Providers",
            Self::RealEstate => "Real Estate",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::ServiceProvider => "service-provider",
            Self::RealEstate => "real-estate",
        }
    }
}

impl fmt::Display for SurveyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The navigable views of the application.
///
/// Plain forward navigation: there is no way to deep-link into a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Survey(SurveyKind),
    Complete,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Survey(SurveyKind::User) => "/survey/user",
            Self::Survey(SurveyKind::ServiceProvider) => "/survey/service-provider",
            Self::Survey(SurveyKind::RealEstate) => "/survey/real-estate",
            Self::Complete => "/survey/complete",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Resolve a path to a route. Unknown paths are not found.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Landing),
            "/survey/complete" => Some(Self::Complete),
            "/dashboard" => Some(Self::Dashboard),
            _ => {
                let slug = path.strip_prefix("/survey/")?;
                SurveyKind::ALL
                    .into_iter()
                    .find(|kind| kind.slug() == slug)
                    .map(Self::Survey)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
