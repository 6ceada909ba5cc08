//! Unit tests for the `story_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Fresh session | Starts at question 0, score 0, not finished |
//! | Scoring | Correct answer adds exactly 1; wrong answer adds 0; locked answers |
//! | Progression | N submit/advance pairs finish the quiz with the right score |
//! | Tiers | Perfect / good / needs practice for the ocean robot quiz |
//! | Reset | Back to the start on the same shared bank |
//! | Construction | Empty and malformed banks are rejected up front |
//! | End to end | Catalog -> session -> result history |

use std::sync::Arc;

use crate::quiz_engine::{
    catalog::tech_news::ocean_robot, helpers::question, start_quiz, MemoryStore, OutcomeTier,
    Progress, QuestionBank, QuizError, QuizRequest, QuizResult, QuizSession, QuizState,
    ResultHistory, ResultSink, StaticCatalog,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn ocean() -> Arc<QuestionBank> {
    Arc::new(ocean_robot().unwrap())
}

/// Answer every question with `picks` and return the final result.
fn play(session: &mut QuizSession, picks: &[usize]) -> QuizResult {
    let mut last = None;
    for &pick in picks {
        session.submit_answer(pick).unwrap();
        if let Progress::Finished(result) = session.advance().unwrap() {
            last = Some(result);
        }
    }
    last.expect("quiz did not finish")
}

// ── fresh session ────────────────────────────────────────────────────────────

#[test]
fn fresh_session_starts_at_zero() {
    let s = QuizSession::new(ocean());
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.score(), 0);
    assert_eq!(s.selected_answer(), None);
    assert!(!s.is_finished());
    assert_eq!(s.total(), 3);
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn correct_answer_adds_exactly_one() {
    let mut s = QuizSession::new(ocean());
    let feedback = s.submit_answer(0).unwrap();
    assert!(feedback.is_correct);
    assert_eq!(feedback.correct_index, 0);
    assert_eq!(s.score(), 1);
    assert_eq!(s.selected_answer(), Some(0));
    assert_eq!(s.is_correct(), Some(true));
}

#[test]
fn wrong_answer_leaves_score_unchanged() {
    for wrong in [1usize, 2] {
        let mut s = QuizSession::new(ocean());
        let feedback = s.submit_answer(wrong).unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(s.score(), 0, "option {wrong}");
        assert_eq!(s.is_correct(), Some(false));
    }
}

#[test]
fn second_submission_is_rejected_and_score_kept() {
    let mut s = QuizSession::new(ocean());
    s.submit_answer(1).unwrap();
    let err = s.submit_answer(0).unwrap_err();
    assert!(matches!(err, QuizError::AlreadyAnswered(0)));
    assert_eq!(s.score(), 0);
    assert_eq!(s.selected_answer(), Some(1));

    let mut s = QuizSession::new(ocean());
    s.submit_answer(0).unwrap();
    assert!(s.submit_answer(0).is_err());
    assert_eq!(s.score(), 1);
    assert_eq!(s.answers().len(), 1);
}

#[test]
fn advance_clears_the_selection() {
    let mut s = QuizSession::new(ocean());
    s.submit_answer(0).unwrap();
    assert_eq!(s.advance().unwrap(), Progress::Next(1));
    assert_eq!(s.selected_answer(), None);
    assert_eq!(s.state(), QuizState::InProgress { index: 1, answered: false });
}

// ── progression / tiers ──────────────────────────────────────────────────────

#[test]
fn all_correct_is_perfect() {
    let mut s = QuizSession::new(ocean());
    let result = play(&mut s, &[0, 1, 2]);
    assert_eq!(result.score, 3);
    assert!(s.is_finished());
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.outcome_tier(), Some(OutcomeTier::Perfect));
    assert_eq!(result.tier, OutcomeTier::Perfect);
}

#[test]
fn two_of_three_is_good() {
    let mut s = QuizSession::new(ocean());
    let result = play(&mut s, &[1, 1, 2]);
    assert_eq!(result.score, 2);
    assert_eq!(s.outcome_tier(), Some(OutcomeTier::Good));
}

#[test]
fn none_right_needs_practice() {
    let mut s = QuizSession::new(ocean());
    let result = play(&mut s, &[1, 0, 0]);
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, OutcomeTier::NeedsPractice);
    assert_eq!(result.tier.to_string(), "needs practice");
}

#[test]
fn one_of_three_needs_practice() {
    let mut s = QuizSession::new(ocean());
    let result = play(&mut s, &[0, 0, 0]);
    assert_eq!(result.score, 1);
    assert_eq!(result.tier, OutcomeTier::NeedsPractice);
}

#[test]
fn score_never_exceeds_position() {
    let mut s = QuizSession::new(ocean());
    for pick in [0, 1, 2] {
        s.submit_answer(pick).unwrap();
        assert!(s.score() <= s.current_index() + 1);
        s.advance().unwrap();
        assert!(s.score() <= s.current_index());
    }
}

// ── reset ────────────────────────────────────────────────────────────────────

#[test]
fn reset_after_finish_returns_to_start_on_same_bank() {
    let bank = ocean();
    let mut s = QuizSession::new(Arc::clone(&bank));
    play(&mut s, &[0, 1, 2]);
    s.reset();
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.score(), 0);
    assert!(!s.is_finished());
    assert_eq!(s.outcome_tier(), None);
    assert!(s.answers().is_empty());
    assert!(Arc::ptr_eq(s.bank(), &bank));
    assert_eq!(s.bank().questions()[0].text, "What does the ocean robot look like?");

    // and the quiz can be played again
    let result = play(&mut s, &[1, 1, 2]);
    assert_eq!(result.score, 2);
}

#[test]
fn reset_mid_quiz() {
    let mut s = QuizSession::new(ocean());
    s.submit_answer(0).unwrap();
    s.advance().unwrap();
    s.submit_answer(1).unwrap();
    s.reset();
    assert_eq!(s.state(), QuizState::InProgress { index: 0, answered: false });
    assert_eq!(s.score(), 0);
}

// ── construction ─────────────────────────────────────────────────────────────

#[test]
fn empty_bank_is_rejected() {
    let err = QuestionBank::new("empty", "Empty", Vec::new()).unwrap_err();
    assert!(matches!(err, QuizError::EmptyBank));
}

#[test]
fn bad_correct_index_is_rejected() {
    let err = QuestionBank::new(
        "bad",
        "Bad",
        vec![
            question("Fine?", &["yes", "no"], 0),
            question("Broken?", &["yes", "no"], 2),
        ],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        QuizError::CorrectIndexOutOfRange { question: 1, correct_index: 2, count: 2 }
    ));
}

#[test]
fn single_option_question_is_rejected() {
    let err = QuestionBank::new("one", "One", vec![question("Only?", &["yes"], 0)]).unwrap_err();
    assert!(matches!(err, QuizError::TooFewOptions { question: 0, count: 1 }));
}

// ── end to end ───────────────────────────────────────────────────────────────

#[test]
fn catalog_to_history() {
    let catalog = StaticCatalog::builtin().unwrap();
    let mut history = ResultHistory::new(MemoryStore::new(), 10);

    let mut s = start_quiz(&catalog, &QuizRequest::new("penguin-rescue")).unwrap();
    let result = play(&mut s, &[1, 0, 1, 2]);
    assert_eq!(result.score, 3);
    assert_eq!(result.total, 4);
    assert_eq!(result.tier, OutcomeTier::Good);
    history.record(&result).unwrap();

    s.reset();
    let result = play(&mut s, &[1, 0, 1, 0]);
    assert_eq!(result.tier, OutcomeTier::Perfect);
    history.record(&result).unwrap();

    assert_eq!(history.results("penguin-rescue").unwrap().len(), 2);
    assert_eq!(history.best_score("penguin-rescue").unwrap(), Some(4));
}

#[test]
fn shuffled_quiz_scores_by_option_text() {
    let catalog = StaticCatalog::builtin().unwrap();
    for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
        let request = QuizRequest {
            quiz_id: "ocean-robot".into(),
            rng_seed: Some(seed),
            shuffle_options: true,
        };
        let mut s = start_quiz(&catalog, &request).unwrap();
        let picks: Vec<usize> = s.bank().questions().iter().map(|q| q.correct_index).collect();
        let result = play(&mut s, &picks);
        assert_eq!(result.tier, OutcomeTier::Perfect, "seed={seed}");
    }
}
