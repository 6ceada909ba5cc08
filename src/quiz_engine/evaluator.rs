use crate::quiz_engine::models::{OptionState, OutcomeTier, Question};

/// Classify a final score.
///
/// `score == total` is perfect; strictly more than `total / 2` (integer
/// division) is good; anything else needs practice. For 3 questions a score
/// of 2 is good and 1 is not.
pub fn outcome_tier(score: usize, total: usize) -> OutcomeTier {
    if score == total {
        OutcomeTier::Perfect
    } else if score > total / 2 {
        OutcomeTier::Good
    } else {
        OutcomeTier::NeedsPractice
    }
}

/// Highlight state for `option` given the player's pick (if any).
pub fn option_state(question: &Question, selected: Option<usize>, option: usize) -> OptionState {
    match selected {
        None => OptionState::Neutral,
        Some(_) if question.is_correct(option) => OptionState::Correct,
        Some(s) if s == option => OptionState::Incorrect,
        Some(_) => OptionState::Dimmed,
    }
}

/// Whole-number percentage, rounded down. Zero total yields zero.
pub fn percent(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score * 100 / total) as u32
}
