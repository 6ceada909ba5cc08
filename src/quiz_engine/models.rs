use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Question bank
// ---------------------------------------------------------------------------

/// One multiple-choice question. Option order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    #[serde(alias = "correctIndex", alias = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// The fixed, ordered list of questions for one quiz.
///
/// A bank can only exist in a validated state: [`QuestionBank::new`] and JSON
/// decoding both run the same checks, so every session built on top of a bank
/// can index `options[correct_index]` without looking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBank")]
pub struct QuestionBank {
    id: String,
    title: String,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct RawBank {
    id: String,
    #[serde(default)]
    title: String,
    questions: Vec<Question>,
}

impl TryFrom<RawBank> for QuestionBank {
    type Error = QuizError;

    fn try_from(raw: RawBank) -> Result<Self, Self::Error> {
        QuestionBank::new(raw.id, raw.title, raw.questions)
    }
}

impl QuestionBank {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (i, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(QuizError::TooFewOptions { question: i, count: q.options.len() });
            }
            if q.correct_index >= q.options.len() {
                return Err(QuizError::CorrectIndexOutOfRange {
                    question: i,
                    correct_index: q.correct_index,
                    count: q.options.len(),
                });
            }
        }
        Ok(QuestionBank { id: id.into(), title: title.into(), questions })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for the usual `len` pairing.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

// ---------------------------------------------------------------------------
// Session state / feedback types
// ---------------------------------------------------------------------------

/// Coarse label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTier {
    Perfect,
    Good,
    NeedsPractice,
}

impl OutcomeTier {
    /// Short line shown on the results card.
    pub fn message(self) -> &'static str {
        match self {
            OutcomeTier::Perfect       => "Amazing! You got every question right!",
            OutcomeTier::Good          => "Great job! You know this story well.",
            OutcomeTier::NeedsPractice => "Nice try! Read the story again and have another go.",
        }
    }
}

impl fmt::Display for OutcomeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeTier::Perfect       => write!(f, "perfect"),
            OutcomeTier::Good          => write!(f, "good"),
            OutcomeTier::NeedsPractice => write!(f, "needs practice"),
        }
    }
}

/// Where a session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    InProgress { index: usize, answered: bool },
    Finished { score: usize },
}

/// How an option should be highlighted on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Question not answered yet; option can be tapped.
    Neutral,
    /// The right answer, revealed once the question is answered.
    Correct,
    /// The option the player picked, and it was wrong.
    Incorrect,
    /// Any other option after answering.
    Dimmed,
}

/// Returned by a successful `submit_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// One answered question, kept for the results review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: usize,
    pub is_correct: bool,
}

/// Result of `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to the question at this index.
    Next(usize),
    /// That was the last question.
    Finished(QuizResult),
}

/// Final score of one finished attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: String,
    pub score: usize,
    pub total: usize,
    pub tier: OutcomeTier,
    pub answers: Vec<AnswerRecord>,
}

// ---------------------------------------------------------------------------
// Start request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub quiz_id: String,
    /// Seed for option shuffling; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    pub shuffle_options: bool,
}

impl QuizRequest {
    /// Questions in authored order, no shuffling.
    pub fn new(quiz_id: impl Into<String>) -> Self {
        QuizRequest { quiz_id: quiz_id.into(), rng_seed: None, shuffle_options: false }
    }
}
