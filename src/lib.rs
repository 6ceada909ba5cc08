//! # story_quiz
//!
//! The quiz engine behind the story cards of a children's news app.
//!
//! Each story ends with a short multiple-choice quiz. This crate owns the
//! rules of that quiz: a fixed, validated list of questions, one locked answer
//! per question, a running score, and a final outcome tier shown on the
//! results card. Rendering, navigation, speech and the content API live
//! elsewhere; they talk to the engine through plain method calls and the JSON
//! view from [`to_client_view`].
//!
//! ## How it works
//!
//! 1. Get a [`QuestionBank`] from a [`QuestionBankProvider`] (the bundled
//!    [`StaticCatalog`], or banks decoded from JSON).
//! 2. Call [`start_quiz`] with a [`QuizRequest`]. Options can be shuffled with
//!    an optional RNG seed, and the correct answer follows its text.
//! 3. Drive the returned [`QuizSession`]: `submit_answer`, `advance`, `reset`.
//! 4. When `advance` reports [`Progress::Finished`], hand the [`QuizResult`]
//!    to a [`ResultSink`] such as [`ResultHistory`].
//!
//! ## Outcome tiers
//!
//! - all correct: **perfect**
//! - more than half (integer division) correct: **good**
//! - otherwise: **needs practice**
//!
//! ## Quick start
//!
//! ```rust
//! use story_quiz::{start_quiz, Progress, QuizRequest, StaticCatalog};
//!
//! let catalog = StaticCatalog::builtin().unwrap();
//! let mut session = start_quiz(&catalog, &QuizRequest::new("ocean-robot")).unwrap();
//!
//! for pick in [0, 1, 2] {
//!     let feedback = session.submit_answer(pick).unwrap();
//!     println!("correct? {}", feedback.is_correct);
//!     if let Progress::Finished(result) = session.advance().unwrap() {
//!         println!("{} / {} - {}", result.score, result.total, result.tier);
//!     }
//! }
//! assert!(session.is_finished());
//! ```

pub mod client_adapter;
pub mod config;
pub mod quiz_engine;

// Convenience re-exports so callers can use `story_quiz::start_quiz`
// directly without reaching into `quiz_engine::`.
pub use client_adapter::to_client_view;
pub use config::QuizSettings;
pub use quiz_engine::{
    start_quiz, AnswerFeedback, AnswerRecord, JsonStore, KeyValueStore, MemoryStore,
    OptionState, OutcomeTier, Progress, Question, QuestionBank, QuestionBankProvider,
    QuizError, QuizRequest, QuizResult, QuizSession, QuizState, ResultHistory, ResultSink,
    StaticCatalog,
};

#[cfg(test)]
mod tests;
