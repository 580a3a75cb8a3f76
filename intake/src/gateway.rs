//! Submission of a finished session to the store.

use intake_types::{Notification, Notifier, Route, StoreError, SubmitError, Survey, SurveyStore};
use tracing::{debug, error, info};

use crate::{Advance, Session};

/// Sends finished sessions to a [`SurveyStore`] and reports the outcome.
///
/// One insert per submission, never retried; the user retries by submitting
/// again.
#[derive(Clone, Copy)]
pub struct Gateway<'a> {
    store: &'a dyn SurveyStore,
    notifier: &'a dyn Notifier,
}

impl<'a> Gateway<'a> {
    pub fn new(store: &'a dyn SurveyStore, notifier: &'a dyn Notifier) -> Self {
        Self { store, notifier }
    }

    /// Handle "Next": move forward, or submit when already on the last step.
    ///
    /// Returns the route to navigate to, if any.
    pub fn advance<S: Survey>(&self, session: &mut Session<S>) -> Result<Option<Route>, SubmitError> {
        match session.next() {
            Advance::Moved(step) => {
                debug!(kind = %S::KIND, step, "moved to next step");
                Ok(None)
            }
            Advance::Submit => self.submit(session).map(Some),
        }
    }

    /// Store the session's answers as one new row.
    ///
    /// On success the caller should navigate to [`Route::Complete`]. On
    /// failure the session keeps its answers and step and can be submitted
    /// again.
    pub fn submit<S: Survey>(&self, session: &mut Session<S>) -> Result<Route, SubmitError> {
        let row = session.begin_submission()?;
        let result = self.insert::<S>(&row);
        session.finish_submission();

        let collection = S::KIND.collection();
        match result {
            Ok(()) => {
                info!(kind = %S::KIND, collection, "survey submitted");
                self.notifier.notify(Notification::submitted());
                Ok(Route::Complete)
            }
            Err(err) => {
                error!(kind = %S::KIND, collection, error = %err, "error submitting survey");
                self.notifier.notify(Notification::submit_failed());
                Err(err.into())
            }
        }
    }

    fn insert<S: Survey>(&self, row: &S::Row) -> Result<(), StoreError> {
        let value = serde_json::to_value(row).map_err(StoreError::Encode)?;
        self.store.insert(S::KIND.collection(), value)
    }
}
