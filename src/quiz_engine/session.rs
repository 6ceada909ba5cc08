//! The quiz state machine.
//!
//! ```text
//! InProgress(0, false) --submit--> InProgress(i, true) --advance--> InProgress(i+1, false)
//!                                          |
//!                                          +--advance on last question--> Finished(score)
//! ```
//!
//! Every operation either applies completely or returns a [`QuizError`] and
//! leaves the session exactly as it was.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::quiz_engine::{
    error::{QuizError, Result},
    evaluator::{option_state, outcome_tier},
    models::{
        AnswerFeedback, AnswerRecord, OptionState, OutcomeTier, Progress, Question,
        QuestionBank, QuizResult, QuizState,
    },
};

/// One attempt at a quiz.
///
/// The bank is shared, never copied or mutated; a session only owns its own
/// position, score and answers.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current_index: usize,
    score: usize,
    selected: Option<usize>,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        debug!(quiz_id = bank.id(), questions = bank.len(), "quiz session created");
        QuizSession {
            bank,
            current_index: 0,
            score: 0,
            selected: None,
            answers: Vec::new(),
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index == self.bank.len()
    }

    /// `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current_index)
    }

    /// Whether the current answer was right; `None` until answered.
    pub fn is_correct(&self) -> Option<bool> {
        let question = self.current_question()?;
        self.selected.map(|s| question.is_correct(s))
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn state(&self) -> QuizState {
        if self.is_finished() {
            QuizState::Finished { score: self.score }
        } else {
            QuizState::InProgress { index: self.current_index, answered: self.selected.is_some() }
        }
    }

    /// Only meaningful after the last question.
    pub fn outcome_tier(&self) -> Option<OutcomeTier> {
        self.is_finished().then(|| outcome_tier(self.score, self.total()))
    }

    pub fn result(&self) -> Option<QuizResult> {
        let tier = self.outcome_tier()?;
        Some(QuizResult {
            quiz_id: self.bank.id().to_string(),
            score: self.score,
            total: self.total(),
            tier,
            answers: self.answers.clone(),
        })
    }

    /// Highlight state of every option of the current question.
    pub fn option_states(&self) -> Vec<OptionState> {
        match self.current_question() {
            Some(q) => (0..q.options.len()).map(|i| option_state(q, self.selected, i)).collect(),
            None => Vec::new(),
        }
    }

    // -- transitions --------------------------------------------------------

    /// Lock in an answer for the current question.
    pub fn submit_answer(&mut self, option: usize) -> Result<AnswerFeedback> {
        let index = self.current_index;
        let question = match self.bank.get(index) {
            Some(q) => q,
            None => {
                warn!(option, "answer submitted after quiz finished");
                return Err(QuizError::SessionFinished);
            }
        };
        if self.selected.is_some() {
            warn!(question = index, option, "answer already locked");
            return Err(QuizError::AlreadyAnswered(index));
        }
        if option >= question.options.len() {
            warn!(question = index, option, count = question.options.len(), "option out of range");
            return Err(QuizError::OptionOutOfRange {
                question: index,
                option,
                count: question.options.len(),
            });
        }

        let is_correct = question.is_correct(option);
        let correct_index = question.correct_index;
        self.selected = Some(option);
        if is_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord { question_index: index, selected: option, is_correct });
        debug!(question = index, option, is_correct, score = self.score, "answer submitted");

        Ok(AnswerFeedback { question_index: index, selected: option, correct_index, is_correct })
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Result<Progress> {
        if self.is_finished() {
            warn!("advance called after quiz finished");
            return Err(QuizError::SessionFinished);
        }
        if self.selected.is_none() {
            warn!(question = self.current_index, "advance called before answering");
            return Err(QuizError::NotAnswered(self.current_index));
        }

        self.selected = None;
        if self.current_index + 1 < self.total() {
            self.current_index += 1;
            debug!(question = self.current_index, "moved to next question");
            return Ok(Progress::Next(self.current_index));
        }

        self.current_index = self.total();
        let result = self.result().ok_or(QuizError::SessionFinished)?;
        info!(
            quiz_id = %result.quiz_id,
            score = result.score,
            total = result.total,
            tier = %result.tier,
            "quiz finished"
        );
        Ok(Progress::Finished(result))
    }

    /// Start over with the same questions.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.selected = None;
        self.answers.clear();
        debug!(quiz_id = self.bank.id(), "quiz session reset");
    }
}
