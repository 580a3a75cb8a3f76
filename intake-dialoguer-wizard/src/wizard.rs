//! Dialoguer front-end for a survey session.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{FuzzySelect, Input, MultiSelect, Select};
use intake::{
    Answers, Gateway, Level, Notification, Notifier, Question, QuestionKind, Route, Session,
    SubmitError, Survey,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Submission could not be started.
    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),
}

impl WizardError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> WizardError {
    if is_cancelled(&err) {
        WizardError::Cancelled
    } else {
        WizardError::Dialoguer(err)
    }
}

/// Single-selects with more options than this get a fuzzy filter.
const FUZZY_THRESHOLD: usize = 6;

/// What the user picked at the bottom of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Next,
    Previous,
    Leave,
}

/// Step-by-step CLI wizard over a [`Session`].
///
/// Each step's visible questions are asked in order; a question revealed by
/// an answer on the same step is asked right after it. Moving back keeps
/// every answer and offers it as the default.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Walk `session` until it is submitted or the user leaves.
    ///
    /// Returns [`Route::Complete`] after a successful submission and
    /// [`Route::Landing`] when the user leaves. A failed submission keeps the
    /// user on the last step so they can try again.
    pub fn run<S: Survey>(
        &self,
        gateway: &Gateway<'_>,
        session: &mut Session<S>,
    ) -> Result<Route, WizardError> {
        println!("{}", session.definition().title);

        loop {
            println!();
            println!("{}", step_header(session.current_step(), session.total_steps()));

            let questions = session
                .definition()
                .step(session.current_step())
                .map(|step| step.questions().to_vec())
                .unwrap_or_default();
            for question in &questions {
                // re-checked per question: an answer above may reveal it
                if question.is_visible(session.answers()) {
                    self.ask(question, session)?;
                }
            }

            match self.navigate(session)? {
                Nav::Previous => {
                    session.previous();
                }
                Nav::Leave => return Ok(Route::Landing),
                Nav::Next => match gateway.advance(session) {
                    Ok(Some(route)) => return Ok(route),
                    Ok(None) => {}
                    Err(SubmitError::Store(err)) => {
                        debug!(error = %err, "staying on last step after failed submission");
                    }
                    Err(err) => return Err(err.into()),
                },
            }
        }
    }

    fn ask<S: Survey>(
        &self,
        question: &Question<
            <S::Answers as Answers>::Single,
            <S::Answers as Answers>::Multi,
        >,
        session: &mut Session<S>,
    ) -> Result<(), WizardError> {
        let theme = self.theme();
        match question.kind() {
            QuestionKind::SingleSelect { field, options } => {
                let current = options
                    .iter()
                    .position(|option| *option == session.answers().single(*field));
                let picked = if options.len() > FUZZY_THRESHOLD {
                    let mut builder = FuzzySelect::with_theme(&*theme)
                        .with_prompt(question.ask())
                        .items(*options);
                    if let Some(idx) = current {
                        builder = builder.default(idx);
                    }
                    builder.interact()
                } else {
                    let mut builder = Select::with_theme(&*theme)
                        .with_prompt(question.ask())
                        .items(*options);
                    if let Some(idx) = current {
                        builder = builder.default(idx);
                    }
                    builder.interact()
                };
                let picked = picked.map_err(prompt_error)?;
                session.set(*field, options[picked]);
            }

            QuestionKind::MultiSelect { field, options } => {
                let selection = session.answers().multi(*field);
                let defaults: Vec<bool> = options
                    .iter()
                    .map(|option| selection.contains(option))
                    .collect();
                let picked = MultiSelect::with_theme(&*theme)
                    .with_prompt(question.ask())
                    .items(*options)
                    .defaults(&defaults)
                    .interact()
                    .map_err(prompt_error)?;
                for (idx, option) in options.iter().enumerate() {
                    session.toggle(*field, *option, picked.contains(&idx));
                }
            }

            QuestionKind::FreeText { field, placeholder } => {
                if let Some(hint) = placeholder {
                    println!("  {hint}");
                }
                let value: String = Input::with_theme(&*theme)
                    .with_prompt(question.ask())
                    .with_initial_text(session.answers().single(*field))
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                session.set(*field, value);
            }
        }
        Ok(())
    }

    fn navigate<S: Survey>(&self, session: &Session<S>) -> Result<Nav, WizardError> {
        let mut choices = vec![(
            if session.is_last_step() { "Submit" } else { "Next" },
            Nav::Next,
        )];
        if !session.is_first_step() {
            choices.push(("Previous", Nav::Previous));
        }
        choices.push(("Back to home", Nav::Leave));

        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
        let picked = self.choose(&labels)?;
        Ok(choices[picked].1)
    }

    /// Plain menu without a prompt; returns the picked index.
    pub fn choose(&self, items: &[&str]) -> Result<usize, WizardError> {
        let theme = self.theme();
        Select::with_theme(&*theme)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }
}

/// `Step 2 of 5 ████████░░░░░░░░░░░░ 40%`
pub fn step_header(step: usize, total: usize) -> String {
    const WIDTH: usize = 20;
    let total = total.max(1);
    let percent = (step as f64 / total as f64 * 100.0).round() as usize;
    let filled = (percent * WIDTH / 100).min(WIDTH);
    format!(
        "Step {step} of {total} {}{} {percent}%",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled)
    )
}

/// Prints notifications to the terminal as they arrive.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => {
                println!("✔ {}: {}", notification.title, notification.description);
            }
            Level::Error => {
                eprintln!("✘ {}: {}", notification.title, notification.description);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_creation() {
        let _wizard = DialoguerWizard::new();
        let _plain = DialoguerWizard::plain();
    }

    #[test]
    fn error_types() {
        let err = WizardError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");
        assert!(err.is_cancelled());

        let err = WizardError::from(SubmitError::InFlight);
        assert_eq!(err.to_string(), "Submission error: A submission is already in progress");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn every_variant_comes_from_prompting_or_submitting() {
        let io = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        let errors = [
            WizardError::Cancelled,
            WizardError::from(dialoguer::Error::IO(io)),
            WizardError::from(SubmitError::InFlight),
        ];
        let origins: Vec<&str> = errors
            .iter()
            .map(|err| match err {
                WizardError::Cancelled | WizardError::Dialoguer(_) => "prompt",
                WizardError::Submit(_) => "gateway",
            })
            .collect();
        assert_eq!(origins, vec!["prompt", "prompt", "gateway"]);
    }

    #[test]
    fn interrupted_prompt_is_cancellation() {
        let io = std::io::Error::from(std::io::ErrorKind::Interrupted);
        assert!(prompt_error(dialoguer::Error::IO(io)).is_cancelled());

        let io = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        assert!(matches!(
            prompt_error(dialoguer::Error::IO(io)),
            WizardError::Dialoguer(_)
        ));
    }

    #[test]
    fn step_header_shows_progress() {
        assert_eq!(
            step_header(3, 5),
            format!("Step 3 of 5 {}{} 60%", "█".repeat(12), "░".repeat(8))
        );
        assert!(step_header(4, 4).ends_with(&format!("{} 100%", "█".repeat(20))));
    }
}
