use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::quiz_engine::{
    catalog::QuestionBankProvider,
    error::Result,
    models::{QuestionBank, QuizRequest},
    session::QuizSession,
    shuffle::shuffle_options,
};

/// Look up the requested quiz and open a session on it.
///
/// Without shuffling the session shares the provider's bank. With shuffling a
/// per-attempt copy is built with every question's options permuted; the
/// question order never changes.
pub fn start_quiz<P: QuestionBankProvider + ?Sized>(
    provider: &P,
    request: &QuizRequest,
) -> Result<QuizSession> {
    let bank = provider.bank(&request.quiz_id)?;
    let bank = if request.shuffle_options {
        shuffled_bank(&bank, request.rng_seed)?
    } else {
        bank
    };
    info!(
        quiz_id = %request.quiz_id,
        questions = bank.len(),
        shuffled = request.shuffle_options,
        "quiz started"
    );
    Ok(QuizSession::new(bank))
}

/// Copy of `bank` with options shuffled by a seeded (or entropy) RNG.
pub fn shuffled_bank(bank: &QuestionBank, rng_seed: Option<u64>) -> Result<Arc<QuestionBank>> {
    let mut rng: StdRng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let questions = shuffle_options(&mut rng, bank.questions());
    Ok(Arc::new(QuestionBank::new(bank.id(), bank.title(), questions)?))
}
