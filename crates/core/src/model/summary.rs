use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::SessionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("summary needs at least one question")]
    NoQuestions,
}

//
// ─── MISSED QUESTION ───────────────────────────────────────────────────────────
//

/// A question whose final outcome was incorrect, kept for post-quiz review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedQuestion {
    /// Index in the canonical question order.
    pub question_index: usize,
    /// Index in the order the learner saw the questions.
    pub position: usize,
    pub prompt: String,
    pub chosen_text: String,
    pub correct_text: String,
}

//
// ─── RESULT BAND ───────────────────────────────────────────────────────────────
//

/// Coarse grading of a finished session, used for the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResultBand {
    KeepLearning,
    Fair,
    Good,
    Excellent,
    Outstanding,
}

impl ResultBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Self::Outstanding
        } else if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 70 {
            Self::Good
        } else if percentage >= 60 {
            Self::Fair
        } else {
            Self::KeepLearning
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! You have mastered this module!",
            Self::Excellent => "Excellent work! You have a strong understanding!",
            Self::Good => "Good job! You're well on your way to mastering this!",
            Self::Fair => "Not bad! Keep studying and you'll improve!",
            Self::KeepLearning => "Keep learning! This topic takes practice and study!",
        }
    }
}

impl fmt::Display for ResultBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// `round(score / total * 100)` with halves rounded up, in integer arithmetic.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn rounded_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score as u64;
    let total = total as u64;
    let pct = (score * 200 + total) / (2 * total);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

//
// ─── SESSION SUMMARY ───────────────────────────────────────────────────────────
//

/// Final outcome of a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    session_id: SessionId,
    title: String,
    score: usize,
    total: usize,
    missed: Vec<MissedQuestion>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build a summary for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::NoQuestions` if `total` is zero.
    pub fn new(
        session_id: SessionId,
        title: impl Into<String>,
        score: usize,
        total: usize,
        missed: Vec<MissedQuestion>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(SessionSummaryError::NoQuestions);
        }
        Ok(Self {
            session_id,
            title: title.into(),
            score,
            total,
            missed,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn missed(&self) -> &[MissedQuestion] {
        &self.missed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        rounded_percentage(self.score, self.total)
    }

    #[must_use]
    pub fn band(&self) -> ResultBand {
        ResultBand::from_percentage(self.percentage())
    }
}
