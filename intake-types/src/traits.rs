use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Notification, Selection, StoreError, SurveyDefinition, SurveyKind};

/// The answers collected by one survey session.
///
/// Implemented by a plain struct per survey with one named field per question.
/// Fields are addressed by two small enums (`Single` and `Multi`) instead of
/// string keys, and every accessor is an exhaustive `match`, so adding a
/// field without wiring it up fails to compile.
pub trait Answers: Default + Clone + fmt::Debug {
    /// Fields holding one string (single-select and free text).
    type Single: Copy + Eq + fmt::Debug;

    /// Fields holding a set of options (multi-select).
    type Multi: Copy + Eq + fmt::Debug;

    fn single(&self, field: Self::Single) -> &str;

    fn single_mut(&mut self, field: Self::Single) -> &mut String;

    fn multi(&self, field: Self::Multi) -> &Selection;

    fn multi_mut(&mut self, field: Self::Multi) -> &mut Selection;

    /// Replace the value of a single-select or free-text field.
    fn set(&mut self, field: Self::Single, value: impl Into<String>) {
        *self.single_mut(field) = value.into();
    }

    /// Add or remove an option of a multi-select field.
    ///
    /// The caller decides which: `checked` is the new checkbox state.
    fn toggle(&mut self, field: Self::Multi, option: impl Into<String>, checked: bool) {
        self.multi_mut(field).toggle(option, checked);
    }
}

/// The step definitions of the survey whose answers are `A`.
pub type DefinitionOf<A> = SurveyDefinition<<A as Answers>::Single, <A as Answers>::Multi>;

/// A concrete questionnaire: its steps, its answers and the row it persists.
pub trait Survey {
    /// Which of the three audiences this survey is for.
    const KIND: SurveyKind;

    type Answers: Answers;

    /// The persisted row shape, without the server-assigned columns.
    type Row: Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq;

    /// Returns the step-by-step structure of the survey.
    fn definition() -> DefinitionOf<Self::Answers>;

    /// Maps answers to the row shape, one column per field, values untouched.
    fn row(answers: &Self::Answers) -> Self::Row;
}

/// A row-oriented persistence service addressed by collection name.
///
/// Implementations are constructed once at startup and passed in to whatever
/// needs them.
pub trait SurveyStore: Send + Sync {
    /// Insert one row. The service assigns `id` and `created_at`.
    fn insert(&self, collection: &str, row: serde_json::Value) -> Result<(), StoreError>;

    /// Fetch every row of a collection, newest first by `created_at`.
    fn select(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError>;
}

impl<T: SurveyStore + ?Sized> SurveyStore for &T {
    fn insert(&self, collection: &str, row: serde_json::Value) -> Result<(), StoreError> {
        (**self).insert(collection, row)
    }

    fn select(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        (**self).select(collection)
    }
}

impl<T: SurveyStore + ?Sized> SurveyStore for Box<T> {
    fn insert(&self, collection: &str, row: serde_json::Value) -> Result<(), StoreError> {
        (**self).insert(collection, row)
    }

    fn select(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        (**self).select(collection)
    }
}

/// Fire-and-forget delivery of user-visible notices.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
