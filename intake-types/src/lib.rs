//! Core types for survey-intake.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `SurveyDefinition`, `Step` and `Question` - The fixed step-by-step structure of a survey
//! - `Selection` - The answer to a multi-select question
//! - `SurveyKind` and `Route` - The three audiences and the navigable views
//! - `Stored` - A persisted row with its server-assigned columns
//! - `Answers`, `Survey`, `SurveyStore` and `Notifier` traits - The seams between
//!   questionnaires, the controller and the outside world

mod selection;
pub use selection::Selection;

mod question;
pub use question::{Condition, Question, QuestionKind};

mod survey_definition;
pub use survey_definition::{Step, SurveyDefinition};

mod kind;
pub use kind::{Route, SurveyKind};

mod notification;
pub use notification::{Level, Notification};

mod record;
pub use record::{Decoded, Stored};

mod error;
pub use error::{StoreError, SubmitError};

mod traits;
pub use traits::{Answers, DefinitionOf, Notifier, Survey, SurveyStore};
