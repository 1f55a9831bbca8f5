//! Quiz content loading from JSON.
//!
//! Accepts either a bare array of questions or an object with a `title` and a
//! `questions` array. Question records may use `prompt` or `q` for the text
//! and `correct_index`, `correctIndex` or `answer` for the correct option.

use serde::Deserialize;
use tracing::debug;

use quiz_core::model::{Question, QuizSet};

use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(alias = "q")]
    prompt: String,
    options: Vec<String>,
    #[serde(default, alias = "correctIndex", alias = "answer")]
    correct_index: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuizDocument {
    Bare(Vec<QuestionRecord>),
    Titled {
        #[serde(default)]
        title: Option<String>,
        questions: Vec<QuestionRecord>,
    },
}

/// Parse and validate a quiz set from JSON text.
///
/// # Errors
///
/// Returns `LoadError::Json` for malformed JSON or an unexpected shape.
/// Returns `LoadError::MissingCorrectIndex` or `LoadError::Question` for an
/// invalid question record, and `LoadError::QuizSet` for an empty list.
pub fn load_quiz_set(json: &str) -> Result<QuizSet, LoadError> {
    let (title, records) = match serde_json::from_str::<QuizDocument>(json)? {
        QuizDocument::Bare(records) => (None, records),
        QuizDocument::Titled { title, questions } => (title, questions),
    };

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let correct_index = record
                .correct_index
                .ok_or(LoadError::MissingCorrectIndex { index })?;
            Question::new(record.prompt, record.options, correct_index)
                .map_err(|source| LoadError::Question { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut quiz = QuizSet::new(questions)?;
    if let Some(title) = title {
        quiz = quiz.with_title(title);
    }
    debug!(title = quiz.title(), questions = quiz.len(), "quiz set loaded");
    Ok(quiz)
}
