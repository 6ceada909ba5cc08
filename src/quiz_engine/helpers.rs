//! Shared builder functions for question banks and their display strings.
//!
//! The built-in catalog, the client adapter and the tests all assemble the
//! same pieces: questions from string literals, option letters, and a one-line
//! score summary. These helpers keep that in one place.

use crate::quiz_engine::{evaluator::percent, models::*};

/// Build one question from string literals.
pub fn question(text: &str, options: &[&str], correct_index: usize) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
    }
}

/// Letter shown next to an option: 0 -> 'A', 1 -> 'B', ...
///
/// Falls back to '?' past 'Z'; no story quiz comes close.
pub fn option_letter(index: usize) -> char {
    if index < 26 {
        (b'A' + index as u8) as char
    } else {
        '?'
    }
}

/// Options as a single line (e.g. "A) Gas  B) Wind  C) Solar energy").
pub fn options_str(question: &Question) -> String {
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}) {}", option_letter(i), o))
        .collect::<Vec<_>>()
        .join("  ")
}

/// "2 / 3 (66%) - good"
pub fn summary_str(result: &QuizResult) -> String {
    format!(
        "{} / {} ({}%) - {}",
        result.score,
        result.total,
        percent(result.score, result.total),
        result.tier
    )
}
