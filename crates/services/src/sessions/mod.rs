mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{BlockReason, SessionError};
pub use plan::PresentationOrder;
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionBuilder, SessionPhase, SessionState};
pub use view::{Feedback, OptionState, OptionView, QuestionView, ResultsView, SessionView};
pub use workflow::{DispatchOutcome, QuizHost, RenderSink, SessionEvent};
