use crate::Question;

/// One screen of a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S, M> {
    questions: Vec<Question<S, M>>,
}

impl<S, M> Step<S, M> {
    pub fn new(questions: Vec<Question<S, M>>) -> Self {
        Self { questions }
    }

    /// All questions on this step, conditional ones included.
    pub fn questions(&self) -> &[Question<S, M>] {
        &self.questions
    }
}

/// The top-level structure containing every step of a survey.
///
/// The step list is fixed when the survey is defined; the number of steps is
/// the survey's total step count.
#[derive(Debug, Clone)]
pub struct SurveyDefinition<S, M> {
    /// Heading shown above the steps.
    pub title: &'static str,

    /// All steps, in order. Step numbers are 1-based.
    pub steps: Vec<Step<S, M>>,
}

impl<S, M> SurveyDefinition<S, M> {
    pub fn new(title: &'static str, steps: Vec<Step<S, M>>) -> Self {
        Self { title, steps }
    }

    /// Get the step with the given 1-based number.
    pub fn step(&self, number: usize) -> Option<&Step<S, M>> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    /// Get the number of steps.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Iterate over every question of every step.
    pub fn questions(&self) -> impl Iterator<Item = &Question<S, M>> {
        self.steps.iter().flat_map(|step| step.questions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum One {
        A,
    }

    #[test]
    fn step_numbers_are_one_based() {
        let definition: SurveyDefinition<One, One> = SurveyDefinition::new(
            "t",
            vec![
                Step::new(vec![Question::single("first?", One::A, &["x"])]),
                Step::new(vec![Question::multi("second?", One::A, &["y", "z"])]),
            ],
        );

        assert_eq!(definition.total_steps(), 2);
        assert!(definition.step(0).is_none());
        assert_eq!(definition.step(1).unwrap().questions()[0].ask(), "first?");
        assert_eq!(definition.step(2).unwrap().questions()[0].options().len(), 2);
        assert!(definition.step(3).is_none());
        assert_eq!(definition.questions().count(), 2);
    }
}
