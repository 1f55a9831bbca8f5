use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSetError {
    #[error("quiz set must contain at least one question")]
    Empty,
}

/// Default module title shown when the content does not name one.
pub const DEFAULT_TITLE: &str = "Quiz";

/// Ordered, non-empty list of questions in their canonical order.
///
/// Presentation order (shuffled or not) is kept elsewhere so the canonical
/// order stays available for restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSet {
    title: String,
    questions: Vec<Question>,
}

impl QuizSet {
    /// Creates a quiz set from validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizSetError::Empty` if no questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizSetError> {
        if questions.is_empty() {
            return Err(QuizSetError::Empty);
        }
        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            questions,
        })
    }

    /// Sets the module title. Blank titles keep the default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str) -> Question {
        Question::new(prompt, vec!["a".into(), "b".into()], 0).unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(QuizSet::new(Vec::new()).unwrap_err(), QuizSetError::Empty);
    }

    #[test]
    fn set_keeps_canonical_order() {
        let set = QuizSet::new(vec![question("one"), question("two")]).unwrap();
        let prompts: Vec<_> = set.iter().map(Question::prompt).collect();
        assert_eq!(prompts, vec!["one", "two"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn title_defaults_and_ignores_blank() {
        let set = QuizSet::new(vec![question("one")]).unwrap();
        assert_eq!(set.title(), DEFAULT_TITLE);

        let set = set.with_title("   ");
        assert_eq!(set.title(), DEFAULT_TITLE);

        let set = set.with_title("Animation Basics");
        assert_eq!(set.title(), "Animation Basics");
    }
}
