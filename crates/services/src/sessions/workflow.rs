use tracing::debug;

use super::service::QuizSession;
use super::view::SessionView;
use crate::error::{BlockReason, SessionError};

/// Discrete UI event forwarded to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Select(usize),
    Next,
    Previous,
    Restart { rerandomize: bool },
}

/// Consumer of session snapshots (the renderer side).
pub trait RenderSink {
    fn render(&mut self, view: &SessionView);
}

impl<F> RenderSink for F
where
    F: FnMut(&SessionView),
{
    fn render(&mut self, view: &SessionView) {
        self(view);
    }
}

/// What happened to a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Applied,
    Blocked(BlockReason),
}

impl DispatchOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied)
    }
}

/// Owns one quiz session and forwards UI events to it.
///
/// Each event is fully processed and rendered before `dispatch` returns.
/// Refused transitions are painted as feedback rather than surfaced as errors.
pub struct QuizHost<S> {
    session: QuizSession,
    sink: S,
}

impl<S: RenderSink> QuizHost<S> {
    /// Take ownership of `session` and render its first question.
    pub fn new(session: QuizSession, mut sink: S) -> Self {
        sink.render(&session.view());
        Self { session, sink }
    }

    /// Apply `event` and render the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` only when the session cannot build its summary;
    /// blocked transitions are reported as `DispatchOutcome::Blocked`.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<DispatchOutcome, SessionError> {
        let result = match event {
            SessionEvent::Select(index) => self.session.select_option(index),
            SessionEvent::Next => self.session.advance(),
            SessionEvent::Previous => self.session.retreat(),
            SessionEvent::Restart { rerandomize } => Ok(self.session.restart(rerandomize)),
        };

        match result {
            Ok(view) => {
                self.sink.render(&view);
                Ok(DispatchOutcome::Applied)
            }
            Err(SessionError::Blocked(reason)) => {
                debug!(
                    session_id = %self.session.session_id(),
                    ?event,
                    %reason,
                    "transition blocked"
                );
                self.sink.render(&self.session.view().with_block(reason));
                Ok(DispatchOutcome::Blocked(reason))
            }
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (QuizSession, S) {
        (self.session, self.sink)
    }
}
