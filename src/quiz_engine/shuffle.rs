use rand::Rng;
use crate::quiz_engine::models::Question;

/// Permute a question's options in place and remap `correct_index` so the
/// same option text stays correct.
pub fn shuffle_question<R: Rng>(rng: &mut R, question: &mut Question) {
    let mut order: Vec<usize> = (0..question.options.len()).collect();

    // Fisher-Yates shuffle
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let options = order.iter().map(|&from| question.options[from].clone()).collect();
    // `order` maps new slot -> old slot; the correct option moves to the slot
    // holding its old index.
    let correct = order
        .iter()
        .position(|&from| from == question.correct_index)
        .unwrap_or(question.correct_index);

    question.options = options;
    question.correct_index = correct;
}

/// Shuffle every question's options; question order is left alone.
pub fn shuffle_options<R: Rng>(rng: &mut R, questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            let mut q = q.clone();
            shuffle_question(rng, &mut q);
            q
        })
        .collect()
}
