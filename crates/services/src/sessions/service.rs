use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

use quiz_core::Clock;
use quiz_core::model::{
    MissedQuestion, Question, QuizSet, SessionId, SessionSettings, SessionSummary,
};

use super::plan::PresentationOrder;
use super::progress::SessionProgress;
use super::view::{QuestionView, ResultsView, SessionView};
use crate::error::{BlockReason, SessionError};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Mutable progress of one run through a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Presentation position; equals the question count only on the results screen.
    pub current_index: usize,
    pub score: usize,
    pub wrong_attempts_on_current: u32,
    pub selected_option_index: Option<usize>,
    pub is_current_resolved: bool,
    /// Append-only within a session.
    pub missed_questions: Vec<MissedQuestion>,
    /// Canonical indices whose outcome is already in `score` or `missed_questions`.
    pub answered: BTreeSet<usize>,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            current_index: 0,
            score: 0,
            wrong_attempts_on_current: 0,
            selected_option_index: None,
            is_current_resolved: false,
            missed_questions: Vec::new(),
            answered: BTreeSet::new(),
        }
    }

    fn enter_question(&mut self, index: usize) {
        self.current_index = index;
        self.wrong_attempts_on_current = 0;
        self.selected_option_index = None;
        self.is_current_resolved = false;
    }
}

/// Coarse position in the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress { current_index: usize },
    Results,
}

enum Pick {
    Correct,
    Retry,
    Missed(MissedQuestion),
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

/// Configures and starts a `QuizSession`.
pub struct SessionBuilder {
    quiz: QuizSet,
    randomize: bool,
    seed: Option<u64>,
    clock: Clock,
    settings: SessionSettings,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(quiz: QuizSet) -> Self {
        Self {
            quiz,
            randomize: false,
            seed: None,
            clock: Clock::default(),
            settings: SessionSettings::default(),
        }
    }

    /// Present the questions in a random order.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Seed the shuffle so presentation orders are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn start(self) -> QuizSession {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let order = PresentationOrder::plan(self.quiz.len(), self.randomize, &mut rng);
        let session = QuizSession {
            id: SessionId::new(),
            quiz: self.quiz,
            order,
            settings: self.settings,
            state: SessionState::initial(),
            clock: self.clock,
            rng,
            started_at: self.clock.now(),
            summary: None,
        };

        info!(
            session_id = %session.id,
            questions = session.quiz.len(),
            randomized = self.randomize,
            "quiz session started"
        );
        session
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz session controller.
///
/// Owns the canonical quiz, the presentation order and the session state.
/// Every operation returns a `SessionView` snapshot for the renderer; refused
/// transitions come back as `SessionError::Blocked` and leave the state as it
/// was.
pub struct QuizSession {
    id: SessionId,
    quiz: QuizSet,
    order: PresentationOrder,
    settings: SessionSettings,
    state: SessionState,
    clock: Clock,
    rng: StdRng,
    started_at: DateTime<Utc>,
    summary: Option<SessionSummary>,
}

impl QuizSession {
    /// Start a session over `questions` with default settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if `questions` is empty.
    pub fn start(questions: Vec<Question>, randomize: bool) -> Result<Self, SessionError> {
        let quiz = QuizSet::new(questions)?;
        Ok(SessionBuilder::new(quiz).with_randomize(randomize).start())
    }

    #[must_use]
    pub fn builder(quiz: QuizSet) -> SessionBuilder {
        SessionBuilder::new(quiz)
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn presentation_order(&self) -> &PresentationOrder {
        &self.order
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Final summary, present only on the results screen.
    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Results
        } else {
            SessionPhase::InProgress {
                current_index: self.state.current_index,
            }
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.quiz.len(),
            position: self.state.current_index,
            answered: self.state.answered.len(),
            is_complete: self.is_complete(),
        }
    }

    /// Question at the current position, `None` on the results screen.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current().map(|(_, question)| question)
    }

    fn current(&self) -> Option<(usize, &Question)> {
        if self.is_complete() {
            return None;
        }
        let canonical = self.order.canonical_index(self.state.current_index)?;
        self.quiz.get(canonical).map(|question| (canonical, question))
    }

    /// Snapshot of what the renderer should show right now.
    #[must_use]
    pub fn view(&self) -> SessionView {
        match self.current() {
            Some((canonical, question)) => SessionView::Question(QuestionView::build(
                self.quiz.title(),
                self.progress(),
                canonical,
                question,
                &self.state,
                &self.settings,
            )),
            None => SessionView::Results(ResultsView::build(
                self.quiz.title(),
                self.quiz.len(),
                &self.state,
            )),
        }
    }

    /// Answer the current question with the option at `option_index`.
    ///
    /// No-op once the question is resolved. A question revisited through
    /// `retreat` can be resolved again, but its first outcome is the one that
    /// counts: it is neither scored nor recorded as missed a second time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Blocked` with `OptionOutOfRange` for an index the
    /// question does not have, or `SessionComplete` on the results screen.
    pub fn select_option(&mut self, option_index: usize) -> Result<SessionView, SessionError> {
        let Some((canonical, question)) = self.current() else {
            return Err(SessionError::Blocked(BlockReason::SessionComplete));
        };

        let len = question.option_count();
        if option_index >= len {
            return Err(SessionError::Blocked(BlockReason::OptionOutOfRange {
                index: option_index,
                len,
            }));
        }
        if self.state.is_current_resolved {
            return Ok(self.view());
        }

        let pick = if question.is_correct(option_index) {
            Pick::Correct
        } else if self.state.wrong_attempts_on_current + 1 >= self.settings.max_wrong_attempts() {
            Pick::Missed(MissedQuestion {
                question_index: canonical,
                position: self.state.current_index,
                prompt: question.prompt().to_string(),
                chosen_text: question.options()[option_index].clone(),
                correct_text: question.correct_text().to_string(),
            })
        } else {
            Pick::Retry
        };

        self.state.selected_option_index = Some(option_index);
        let first_outcome = match pick {
            Pick::Retry => false,
            Pick::Correct | Pick::Missed(_) => self.state.answered.insert(canonical),
        };
        match pick {
            Pick::Correct => {
                self.state.is_current_resolved = true;
                if first_outcome {
                    self.state.score += 1;
                }
                debug!(
                    session_id = %self.id,
                    position = self.state.current_index,
                    counted = first_outcome,
                    "answered correctly"
                );
            }
            Pick::Retry => {
                self.state.wrong_attempts_on_current += 1;
                debug!(
                    session_id = %self.id,
                    position = self.state.current_index,
                    attempts = self.state.wrong_attempts_on_current,
                    "wrong answer, retry allowed"
                );
            }
            Pick::Missed(missed) => {
                self.state.wrong_attempts_on_current += 1;
                self.state.is_current_resolved = true;
                debug!(
                    session_id = %self.id,
                    position = self.state.current_index,
                    question_index = missed.question_index,
                    counted = first_outcome,
                    "answer revealed after wrong attempts"
                );
                if first_outcome {
                    self.state.missed_questions.push(missed);
                }
            }
        }

        Ok(self.view())
    }

    /// Move to the next question, or to the results screen after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Blocked` with `AnswerRequired` while the current
    /// question is unresolved, or `SessionComplete` on the results screen.
    pub fn advance(&mut self) -> Result<SessionView, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Blocked(BlockReason::SessionComplete));
        }
        if !self.state.is_current_resolved {
            return Err(SessionError::Blocked(BlockReason::AnswerRequired));
        }

        let next = self.state.current_index + 1;
        if next < self.quiz.len() {
            self.state.enter_question(next);
            debug!(session_id = %self.id, position = next, "advanced");
            return Ok(self.view());
        }

        let completed_at = self.clock.now_not_before(self.started_at);
        let summary = SessionSummary::new(
            self.id,
            self.quiz.title(),
            self.state.score,
            self.quiz.len(),
            self.state.missed_questions.clone(),
            self.started_at,
            completed_at,
        )?;
        self.state.current_index = next;
        info!(
            session_id = %self.id,
            score = summary.score(),
            total = summary.total(),
            percentage = summary.percentage(),
            "quiz session completed"
        );
        self.summary = Some(summary);

        Ok(self.view())
    }

    /// Go back one question. The earlier answer is not restored: the question
    /// is shown fresh, while its recorded outcome stays in the score or the
    /// missed list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Blocked` with `RetreatDisabled` when the settings
    /// disallow back-navigation, or `SessionComplete` on the results screen.
    pub fn retreat(&mut self) -> Result<SessionView, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Blocked(BlockReason::SessionComplete));
        }
        if !self.settings.allow_retreat() {
            return Err(SessionError::Blocked(BlockReason::RetreatDisabled));
        }
        if self.state.current_index == 0 {
            return Ok(self.view());
        }

        let previous = self.state.current_index - 1;
        self.state.enter_question(previous);
        debug!(session_id = %self.id, position = previous, "retreated");
        Ok(self.view())
    }

    /// Replace the session with a fresh run from the first question.
    ///
    /// The presentation order is reshuffled only when `rerandomize` is true.
    pub fn restart(&mut self, rerandomize: bool) -> SessionView {
        if rerandomize {
            self.order = PresentationOrder::shuffled(self.quiz.len(), &mut self.rng);
        }
        self.id = SessionId::new();
        self.state = SessionState::initial();
        self.started_at = self.clock.now();
        self.summary = None;

        info!(session_id = %self.id, rerandomized = rerandomize, "quiz session restarted");
        self.view()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("questions_len", &self.quiz.len())
            .field("order", &self.order)
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("is_complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
