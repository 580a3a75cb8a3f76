use crate::Answers;

/// A single question shown on a survey step.
///
/// `S` and `M` are the survey's single-value and multi-select field enums,
/// so a question can only ever point at a field of the matching shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Question<S, M> {
    /// The prompt text shown to the user.
    ask: &'static str,

    /// The kind of question (determines input type and the field it writes).
    kind: QuestionKind<S, M>,

    /// When present, the question is only shown while the condition holds.
    condition: Option<Condition<S>>,
}

impl<S: Copy, M: Copy> Question<S, M> {
    /// Create a new question that is always shown.
    pub fn new(ask: &'static str, kind: QuestionKind<S, M>) -> Self {
        Self {
            ask,
            kind,
            condition: None,
        }
    }

    /// A single-select (radio) question.
    pub fn single(ask: &'static str, field: S, options: &'static [&'static str]) -> Self {
        Self::new(ask, QuestionKind::SingleSelect { field, options })
    }

    /// A multi-select (checkbox) question.
    pub fn multi(ask: &'static str, field: M, options: &'static [&'static str]) -> Self {
        Self::new(ask, QuestionKind::MultiSelect { field, options })
    }

    /// A free-text question.
    pub fn text(ask: &'static str, field: S, placeholder: Option<&'static str>) -> Self {
        Self::new(ask, QuestionKind::FreeText { field, placeholder })
    }

    /// Only show this question while `field` is answered with exactly `value`.
    pub fn shown_when(mut self, field: S, value: &'static str) -> Self {
        self.condition = Some(Condition::Equals { field, value });
        self
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &'static str {
        self.ask
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind<S, M> {
        &self.kind
    }

    pub fn condition(&self) -> Option<&Condition<S>> {
        self.condition.as_ref()
    }

    /// The options offered, empty for free-text questions.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            QuestionKind::SingleSelect { options, .. } | QuestionKind::MultiSelect { options, .. } => {
                options
            }
            QuestionKind::FreeText { .. } => &[],
        }
    }

    /// Check whether the question is visible given the answers so far.
    pub fn is_visible<A>(&self, answers: &A) -> bool
    where
        A: Answers<Single = S, Multi = M>,
    {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition.holds(answers))
    }

    /// Reset the field this question writes to its empty value.
    pub fn clear<A>(&self, answers: &mut A)
    where
        A: Answers<Single = S, Multi = M>,
    {
        match self.kind {
            QuestionKind::SingleSelect { field, .. } | QuestionKind::FreeText { field, .. } => {
                answers.single_mut(field).clear();
            }
            QuestionKind::MultiSelect { field, .. } => answers.multi_mut(field).clear(),
        }
    }
}

/// The kind of question, determining input type and the answer field it writes.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind<S, M> {
    /// Pick exactly one option (radio group).
    SingleSelect {
        field: S,
        options: &'static [&'static str],
    },

    /// Pick any number of options (checkboxes).
    MultiSelect {
        field: M,
        options: &'static [&'static str],
    },

    /// Optional free-form text.
    FreeText {
        field: S,
        placeholder: Option<&'static str>,
    },
}

impl<S, M> QuestionKind<S, M> {
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::MultiSelect { .. })
    }
}

/// A visibility rule for a conditional question.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition<S> {
    /// Visible while the single-value field holds exactly this value.
    Equals { field: S, value: &'static str },
}

impl<S: Copy> Condition<S> {
    pub fn holds<A>(&self, answers: &A) -> bool
    where
        A: Answers<Single = S>,
    {
        match self {
            Self::Equals { field, value } => answers.single(*field) == *value,
        }
    }
}
