use std::fmt;

use quiz_core::model::{
    MissedQuestion, Question, ResultBand, SessionSettings, rounded_percentage,
};

use super::progress::SessionProgress;
use super::service::SessionState;
use crate::error::BlockReason;

//
// ─── OPTION STATE ──────────────────────────────────────────────────────────────
//

/// Visual state of a single answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    /// Latest pick on a question that is still open for another try.
    Selected,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Message shown under the options after the latest event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    TryAgain { attempts_left: u32 },
    Revealed { correct_text: String },
    Blocked(BlockReason),
}

impl Feedback {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Feedback::None)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::None => Ok(()),
            Feedback::Correct => f.write_str("Excellent! That's correct."),
            Feedback::TryAgain { attempts_left } => {
                let noun = if *attempts_left == 1 { "try" } else { "tries" };
                write!(f, "Not quite. Try again ({attempts_left} {noun} left).")
            }
            Feedback::Revealed { correct_text } => {
                write!(f, "Not quite right. The correct answer is: {correct_text}")
            }
            Feedback::Blocked(reason) => write!(f, "{reason}"),
        }
    }
}

//
// ─── QUESTION VIEW ─────────────────────────────────────────────────────────────
//

/// Everything a renderer needs to paint the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub title: String,
    /// 1-based position in presentation order.
    pub number: usize,
    pub total: usize,
    /// Index of this question in the canonical order.
    pub question_index: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub progress: SessionProgress,
    pub feedback: Feedback,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub wrong_attempts: u32,
}

impl QuestionView {
    pub(crate) fn build(
        title: &str,
        progress: SessionProgress,
        question_index: usize,
        question: &Question,
        state: &SessionState,
        settings: &SessionSettings,
    ) -> Self {
        let resolved = state.is_current_resolved;
        let selected = state.selected_option_index;

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionView {
                index,
                text: text.clone(),
                state: option_state(index, question.correct_index(), selected, resolved),
            })
            .collect();

        let feedback = match (resolved, selected) {
            (true, Some(pick)) if question.is_correct(pick) => Feedback::Correct,
            (true, _) => Feedback::Revealed {
                correct_text: question.correct_text().to_string(),
            },
            (false, Some(_)) => Feedback::TryAgain {
                attempts_left: settings
                    .max_wrong_attempts()
                    .saturating_sub(state.wrong_attempts_on_current),
            },
            (false, None) => Feedback::None,
        };

        Self {
            title: title.to_string(),
            number: progress.position + 1,
            total: progress.total,
            question_index,
            prompt: question.prompt().to_string(),
            options,
            progress,
            feedback,
            can_advance: resolved,
            can_retreat: settings.allow_retreat() && progress.position > 0,
            wrong_attempts: state.wrong_attempts_on_current,
        }
    }

    /// "Question N of M".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    #[must_use]
    pub fn option_state(&self, index: usize) -> Option<OptionState> {
        self.options.get(index).map(|opt| opt.state)
    }
}

fn option_state(
    index: usize,
    correct_index: usize,
    selected: Option<usize>,
    resolved: bool,
) -> OptionState {
    let picked = selected == Some(index);
    match (resolved, picked) {
        (true, _) if index == correct_index => OptionState::Correct,
        (true, true) => OptionState::Wrong,
        (false, true) => OptionState::Selected,
        _ => OptionState::Neutral,
    }
}

//
// ─── RESULTS VIEW ──────────────────────────────────────────────────────────────
//

/// Terminal screen: score, percentage and the questions to review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: ResultBand,
    pub missed: Vec<MissedQuestion>,
    /// Set by the host when an event was refused on this screen.
    pub notice: Option<BlockReason>,
}

impl ResultsView {
    pub(crate) fn build(title: &str, total: usize, state: &SessionState) -> Self {
        let percentage = rounded_percentage(state.score, total);
        Self {
            title: title.to_string(),
            score: state.score,
            total,
            percentage,
            band: ResultBand::from_percentage(percentage),
            missed: state.missed_questions.clone(),
            notice: None,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.band.message()
    }
}

//
// ─── SESSION VIEW ──────────────────────────────────────────────────────────────
//

/// Immutable snapshot emitted after every session event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Question(QuestionView),
    Results(ResultsView),
}

impl SessionView {
    #[must_use]
    pub fn as_question(&self) -> Option<&QuestionView> {
        match self {
            SessionView::Question(view) => Some(view),
            SessionView::Results(_) => None,
        }
    }

    #[must_use]
    pub fn as_results(&self) -> Option<&ResultsView> {
        match self {
            SessionView::Results(view) => Some(view),
            SessionView::Question(_) => None,
        }
    }

    #[must_use]
    pub fn is_results(&self) -> bool {
        matches!(self, SessionView::Results(_))
    }

    /// Overlays a refused-transition message on the snapshot.
    #[must_use]
    pub fn with_block(mut self, reason: BlockReason) -> Self {
        match &mut self {
            SessionView::Question(view) => view.feedback = Feedback::Blocked(reason),
            SessionView::Results(view) => view.notice = Some(reason),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn question() -> Question {
        Question::new("2+2?", vec!["3".into(), "4".into(), "5".into()], 1).unwrap()
    }

    fn state(selected: Option<usize>, resolved: bool, wrong: u32) -> SessionState {
        SessionState {
            current_index: 0,
            score: 0,
            wrong_attempts_on_current: wrong,
            selected_option_index: selected,
            is_current_resolved: resolved,
            missed_questions: Vec::new(),
            answered: BTreeSet::new(),
        }
    }

    fn build(state: &SessionState) -> QuestionView {
        QuestionView::build(
            "Quiz",
            SessionProgress {
                total: 2,
                position: 0,
                answered: 0,
                is_complete: false,
            },
            0,
            &question(),
            state,
            &SessionSettings::default(),
        )
    }

    #[test]
    fn fresh_question_is_neutral_and_blocks_advance() {
        let view = build(&state(None, false, 0));
        assert!(view.options.iter().all(|o| o.state == OptionState::Neutral));
        assert!(view.feedback.is_none());
        assert!(!view.can_advance);
        assert!(!view.can_retreat);
        assert_eq!(view.label(), "Question 1 of 2");
        assert!((view.progress.fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn first_wrong_pick_is_tentative() {
        let view = build(&state(Some(0), false, 1));
        assert_eq!(view.option_state(0), Some(OptionState::Selected));
        assert_eq!(view.option_state(1), Some(OptionState::Neutral));
        assert_eq!(view.feedback, Feedback::TryAgain { attempts_left: 1 });
        assert_eq!(view.feedback.to_string(), "Not quite. Try again (1 try left).");
    }

    #[test]
    fn correct_pick_is_marked_correct() {
        let view = build(&state(Some(1), true, 0));
        assert_eq!(view.option_state(1), Some(OptionState::Correct));
        assert_eq!(view.option_state(0), Some(OptionState::Neutral));
        assert_eq!(view.feedback, Feedback::Correct);
        assert!(view.can_advance);
    }

    #[test]
    fn revealed_answer_marks_pick_wrong_and_answer_correct() {
        let view = build(&state(Some(2), true, 2));
        assert_eq!(view.option_state(2), Some(OptionState::Wrong));
        assert_eq!(view.option_state(1), Some(OptionState::Correct));
        assert_eq!(
            view.feedback.to_string(),
            "Not quite right. The correct answer is: 4"
        );
    }

    #[test]
    fn block_overlays_question_feedback() {
        let view = SessionView::Question(build(&state(None, false, 0)))
            .with_block(BlockReason::AnswerRequired);
        let question = view.as_question().unwrap();
        assert_eq!(question.feedback, Feedback::Blocked(BlockReason::AnswerRequired));
        assert_eq!(
            question.feedback.to_string(),
            "Select an answer before continuing."
        );
    }

    #[test]
    fn results_view_reports_band() {
        let mut st = state(None, false, 0);
        st.score = 9;
        let view = ResultsView::build("Quiz", 10, &st);
        assert_eq!(view.percentage, 90);
        assert_eq!(view.band, ResultBand::Outstanding);
        assert_eq!(view.message(), "Outstanding! You have mastered this module!");
    }
}
