//! Core quiz engine: question banks, the session state machine, and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: questions, banks, tiers, feedback, results, requests |
//! | `error`     | `QuizError` and the crate `Result` alias |
//! | `session`   | `QuizSession`: submit / advance / reset and derived queries |
//! | `evaluator` | Outcome tier, option highlight state, percentages |
//! | `shuffle`   | Seeded Fisher-Yates option shuffling with answer remapping |
//! | `helpers`   | Builder and formatting functions shared across modules |
//! | `catalog`   | `QuestionBankProvider` trait and the bundled story quizzes |
//! | `loader`    | Question banks from JSON strings and files |
//! | `launcher`  | Single entry point `start_quiz()` |
//! | `store`     | Typed JSON key/value store and the results history |

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod helpers;
pub mod launcher;
pub mod loader;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod store;

// Re-export the public API surface so callers can use
// `quiz_engine::start_quiz` without reaching into sub-modules.
pub use catalog::{QuestionBankProvider, StaticCatalog};
pub use error::{QuizError, Result};
pub use launcher::start_quiz;
pub use models::{
    AnswerFeedback, AnswerRecord, OptionState, OutcomeTier, Progress, Question,
    QuestionBank, QuizRequest, QuizResult, QuizState,
};
pub use session::QuizSession;
pub use store::{JsonStore, KeyValueStore, MemoryStore, ResultHistory, ResultSink};
