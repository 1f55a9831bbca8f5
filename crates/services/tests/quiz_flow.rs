use quiz_core::model::{Question, QuizSet, SessionSettings};
use quiz_core::time::{fixed_clock, fixed_now};
use services::{
    BlockReason, DispatchOutcome, Feedback, OptionState, QuizHost, QuizSession, SessionEvent,
    SessionPhase, SessionView, load_quiz_set,
};

fn question(prompt: &str, options: &[&str], correct: usize) -> Question {
    Question::new(
        prompt,
        options.iter().map(|s| (*s).to_string()).collect(),
        correct,
    )
    .unwrap()
}

fn scenario_questions() -> Vec<Question> {
    vec![
        question("2+2?", &["3", "4", "5"], 1),
        question("Capital of France?", &["Paris", "Rome"], 0),
    ]
}

#[test]
fn two_question_scenario_ends_at_fifty_percent() {
    let mut session = QuizSession::start(scenario_questions(), false).unwrap();
    assert_eq!(session.state().current_index, 0);
    assert_eq!(session.view().as_question().unwrap().prompt, "2+2?");

    session.select_option(0).unwrap();
    assert!(!session.state().is_current_resolved);
    assert_eq!(session.state().wrong_attempts_on_current, 1);

    session.select_option(1).unwrap();
    assert!(session.state().is_current_resolved);
    assert_eq!(session.state().score, 1);

    let view = session.advance().unwrap();
    assert_eq!(session.state().current_index, 1);
    assert_eq!(view.as_question().unwrap().prompt, "Capital of France?");

    session.select_option(1).unwrap();
    session.select_option(1).unwrap();
    assert!(session.state().is_current_resolved);
    assert_eq!(session.state().score, 1);
    let missed = &session.state().missed_questions;
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].question_index, 1);
    assert_eq!(missed[0].chosen_text, "Rome");
    assert_eq!(missed[0].correct_text, "Paris");

    let view = session.advance().unwrap();
    assert_eq!(session.phase(), SessionPhase::Results);
    let results = view.as_results().unwrap();
    assert_eq!(results.score, 1);
    assert_eq!(results.total, 2);
    assert_eq!(results.percentage, 50);
    assert_eq!(results.missed.len(), 1);
}

#[test]
fn restart_after_results_keeps_order_and_clears_state() {
    let quiz = QuizSet::new(scenario_questions()).unwrap();
    let mut session = QuizSession::builder(quiz)
        .with_randomize(true)
        .with_seed(99)
        .with_clock(fixed_clock())
        .start();
    let order = session.presentation_order().clone();

    while !session.is_complete() {
        session.select_option(0).unwrap();
        if !session.state().is_current_resolved {
            session.select_option(0).unwrap();
        }
        session.advance().unwrap();
    }
    assert_eq!(session.summary().unwrap().completed_at(), fixed_now());

    session.restart(false);
    assert_eq!(session.presentation_order(), &order);
    assert_eq!(session.state().current_index, 0);
    assert_eq!(session.state().score, 0);
    assert!(session.state().missed_questions.is_empty());
    assert!(session.summary().is_none());
}

#[test]
fn host_drives_loaded_quiz_to_results() {
    let quiz = load_quiz_set(
        r#"{"title": "Arithmetic", "questions": [
            {"q": "1+1?", "options": ["2", "3"], "answer": 0},
            {"q": "2+3?", "options": ["4", "5", "6"], "answer": 1}
        ]}"#,
    )
    .unwrap();
    let session = QuizSession::builder(quiz)
        .with_settings(SessionSettings::single_attempt())
        .start();

    let mut views: Vec<SessionView> = Vec::new();
    let mut host = QuizHost::new(session, |view: &SessionView| views.push(view.clone()));

    assert_eq!(
        host.dispatch(SessionEvent::Next).unwrap(),
        DispatchOutcome::Blocked(BlockReason::AnswerRequired)
    );
    assert!(host.dispatch(SessionEvent::Select(0)).unwrap().is_applied());
    assert!(host.dispatch(SessionEvent::Next).unwrap().is_applied());
    assert_eq!(
        host.dispatch(SessionEvent::Previous).unwrap(),
        DispatchOutcome::Blocked(BlockReason::RetreatDisabled)
    );
    assert!(host.dispatch(SessionEvent::Select(2)).unwrap().is_applied());
    assert!(host.dispatch(SessionEvent::Next).unwrap().is_applied());
    drop(host);

    let blocked = views[1].as_question().unwrap();
    assert_eq!(blocked.feedback, Feedback::Blocked(BlockReason::AnswerRequired));

    let revealed = views[5].as_question().unwrap();
    assert_eq!(revealed.option_state(2), Some(OptionState::Wrong));
    assert_eq!(revealed.option_state(1), Some(OptionState::Correct));

    let results = views.last().unwrap().as_results().unwrap();
    assert_eq!(results.title, "Arithmetic");
    assert_eq!(results.score, 1);
    assert_eq!(results.percentage, 50);
    assert_eq!(results.missed[0].chosen_text, "6");
}
