//! Route loop tying the views together.

use intake::surveys::{RealEstateSurvey, ServiceProviderSurvey, UserSurvey};
use intake::{Dashboard, Gateway, Route, Session, Survey, SurveyKind, SurveyStore};
use tracing::info;

use crate::screens;
use crate::wizard::{DialoguerWizard, TerminalNotifier, WizardError};

/// The interactive application: landing menu, surveys, completion and dashboard.
pub struct App<'a> {
    store: &'a dyn SurveyStore,
    wizard: DialoguerWizard,
}

impl<'a> App<'a> {
    pub fn new(store: &'a dyn SurveyStore, wizard: DialoguerWizard) -> Self {
        Self { store, wizard }
    }

    /// Show views starting at `route` until the user quits from the landing menu.
    pub fn run(&self, mut route: Route) -> Result<(), WizardError> {
        loop {
            info!(%route, "navigate");
            route = match route {
                Route::Landing => match self.landing()? {
                    Some(next) => next,
                    None => return Ok(()),
                },
                Route::Survey(kind) => self.survey(kind)?,
                Route::Complete => {
                    println!("\n{}\n", screens::completion());
                    Route::Landing
                }
                Route::Dashboard => {
                    println!("\n{}", screens::dashboard(&Dashboard::fetch(self.store)));
                    Route::Landing
                }
            };
        }
    }

    /// `None` when the user chooses to quit.
    fn landing(&self) -> Result<Option<Route>, WizardError> {
        println!("\n{}\n{}\n", screens::landing(), screens::landing_subtitle());

        let mut routes: Vec<(String, Route)> = SurveyKind::ALL
            .into_iter()
            .map(|kind| (screens::survey_choice(kind), Route::Survey(kind)))
            .collect();
        routes.push(("View survey dashboard".to_string(), Route::Dashboard));

        let mut labels: Vec<&str> = routes.iter().map(|(label, _)| label.as_str()).collect();
        labels.push("Quit");

        let picked = match self.wizard.choose(&labels) {
            Ok(idx) => idx,
            Err(WizardError::Cancelled) => return Ok(None),
            Err(err) => return Err(err),
        };
        Ok(routes.get(picked).map(|(_, route)| *route))
    }

    fn survey(&self, kind: SurveyKind) -> Result<Route, WizardError> {
        match kind {
            SurveyKind::User => self.take::<UserSurvey>(),
            SurveyKind::ServiceProvider => self.take::<ServiceProviderSurvey>(),
            SurveyKind::RealEstate => self.take::<RealEstateSurvey>(),
        }
    }

    fn take<S: Survey>(&self) -> Result<Route, WizardError> {
        let notifier = TerminalNotifier;
        let gateway = Gateway::new(self.store, &notifier);
        let mut session = Session::<S>::new();
        match self.wizard.run(&gateway, &mut session) {
            Err(WizardError::Cancelled) => {
                info!(kind = %S::KIND, "survey abandoned");
                Ok(Route::Landing)
            }
            other => other,
        }
    }
}
