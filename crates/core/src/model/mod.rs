mod ids;
mod question;
mod quiz_set;
mod settings;
mod summary;

pub use ids::SessionId;

pub use question::{Question, QuestionError};
pub use quiz_set::{QuizSet, QuizSetError};
pub use settings::{SessionSettings, SettingsError};
pub use summary::{
    MissedQuestion, ResultBand, SessionSummary, SessionSummaryError, rounded_percentage,
};
