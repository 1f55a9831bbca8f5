#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{BlockReason, LoadError, SessionError};
pub use loader::load_quiz_set;

pub use sessions::{
    DispatchOutcome, Feedback, OptionState, OptionView, QuestionView, QuizHost, QuizSession,
    RenderSink, ResultsView, SessionBuilder, SessionEvent, SessionPhase, SessionProgress,
    SessionState, SessionView,
};
