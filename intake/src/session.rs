//! Step controller and answer store for one survey form instance.

use std::fmt;

use intake_types::{Answers, DefinitionOf, Question, SubmitError, Survey, SurveyKind};

type SingleOf<S> = <<S as Survey>::Answers as Answers>::Single;
type MultiOf<S> = <<S as Survey>::Answers as Answers>::Multi;

/// What happened when the user pressed "Next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to the given 1-based step.
    Moved(usize),
    /// Already on the last step: the survey should be submitted.
    Submit,
}

/// One in-progress survey: its answers, the current step and the submit guard.
///
/// Created with every answer empty. Nothing here is persisted; the session is
/// dropped once submission succeeds or the user leaves.
pub struct Session<S: Survey> {
    definition: DefinitionOf<S::Answers>,
    answers: S::Answers,
    current_step: usize,
    submitting: bool,
}

impl<S: Survey> Session<S> {
    pub fn new() -> Self {
        Self {
            definition: S::definition(),
            answers: S::Answers::default(),
            current_step: 1,
            submitting: false,
        }
    }

    pub fn kind(&self) -> SurveyKind {
        S::KIND
    }

    pub fn definition(&self) -> &DefinitionOf<S::Answers> {
        &self.definition
    }

    pub fn answers(&self) -> &S::Answers {
        &self.answers
    }

    /// The current 1-based step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.definition.total_steps()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step >= self.total_steps()
    }

    /// `round(current_step / total_steps * 100)`.
    pub fn progress_percent(&self) -> u8 {
        let total = self.total_steps().max(1) as f64;
        (self.current_step as f64 / total * 100.0).round() as u8
    }

    /// Replace a single-select or free-text answer.
    pub fn set(&mut self, field: SingleOf<S>, value: impl Into<String>) {
        self.answers.set(field, value);
    }

    /// Tick or untick an option of a multi-select answer.
    pub fn toggle(&mut self, field: MultiOf<S>, option: impl Into<String>, checked: bool) {
        self.answers.toggle(field, option, checked);
    }

    /// Questions of the current step that are shown given the answers so far.
    pub fn visible_questions(
        &self,
    ) -> impl Iterator<Item = &Question<SingleOf<S>, MultiOf<S>>> + '_ {
        self.definition
            .step(self.current_step)
            .map(|step| step.questions())
            .unwrap_or_default()
            .iter()
            .filter(|question| question.is_visible(&self.answers))
    }

    /// Move forward one step, or report that the survey is ready to submit.
    pub fn next(&mut self) -> Advance {
        if self.current_step < self.total_steps() {
            self.current_step += 1;
            Advance::Moved(self.current_step)
        } else {
            Advance::Submit
        }
    }

    /// Move back one step. Returns `false` on the first step.
    pub fn previous(&mut self) -> bool {
        if self.current_step > 1 {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    /// The row that would be stored for the current answers.
    ///
    /// Answers to questions that are currently hidden are sent empty. The
    /// session itself keeps them, so revealing the question again brings the
    /// earlier selection back.
    pub fn row(&self) -> S::Row {
        let mut answers = self.answers.clone();
        for question in self.definition.questions() {
            if !question.is_visible(&self.answers) {
                question.clear(&mut answers);
            }
        }
        S::row(&answers)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark a submission as in flight and produce the row to send.
    ///
    /// Fails with [`SubmitError::InFlight`] until [`finish_submission`](Self::finish_submission)
    /// is called for the previous one.
    pub fn begin_submission(&mut self) -> Result<S::Row, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        self.submitting = true;
        Ok(self.row())
    }

    /// Release the submit guard, whatever the outcome of the insert was.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }
}

impl<S: Survey> Default for Session<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Survey> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("kind", &S::KIND)
            .field("answers", &self.answers)
            .field("current_step", &self.current_step)
            .field("total_steps", &self.total_steps())
            .field("submitting", &self.submitting)
            .finish()
    }
}
