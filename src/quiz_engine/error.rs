use thiserror::Error;

/// Everything the quiz engine can refuse to do.
///
/// Construction errors surface while a [`QuestionBank`](super::models::QuestionBank)
/// is built or decoded. Operation errors come back from a
/// [`QuizSession`](super::session::QuizSession) call that would break the quiz
/// rules; the session state is untouched when one is returned.
#[derive(Debug, Error)]
pub enum QuizError {
    // -- construction -------------------------------------------------------
    #[error("question bank is empty")]
    EmptyBank,

    #[error("question {question} has {count} options, at least 2 are required")]
    TooFewOptions { question: usize, count: usize },

    #[error("question {question} marks option {correct_index} correct but has only {count} options")]
    CorrectIndexOutOfRange {
        question: usize,
        correct_index: usize,
        count: usize,
    },

    #[error("no quiz registered under id '{0}'")]
    UnknownQuiz(String),

    // -- invalid operations -------------------------------------------------
    #[error("option {option} is out of range for question {question} ({count} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        count: usize,
    },

    #[error("question {0} is already answered")]
    AlreadyAnswered(usize),

    #[error("question {0} has not been answered yet")]
    NotAnswered(usize),

    #[error("the quiz is already finished")]
    SessionFinished,

    // -- loading / persistence ----------------------------------------------
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;
